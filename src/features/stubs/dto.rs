use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StubMessageDto {
    pub message: String,
}
