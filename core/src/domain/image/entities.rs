/// An image ready to be embedded inline in a provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub mime_type: String,
    pub data: String,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    /// `data:` URL form used by OpenAI compatible providers.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}
