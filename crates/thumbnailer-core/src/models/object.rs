/// An object fetched from storage: its bytes and declared content type.
#[derive(Debug, Clone, Default)]
pub struct ObjectRecord {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

impl ObjectRecord {
    pub fn new(data: Vec<u8>, content_type: Option<String>) -> Self {
        Self { data, content_type }
    }

    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}
