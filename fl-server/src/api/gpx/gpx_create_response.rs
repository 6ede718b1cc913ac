use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GpxCreateResponse {
    pub success: bool,
    pub id: String,
    pub message: String,
}
