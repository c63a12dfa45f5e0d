mod chat_client;
mod mock_text_generator;
mod request_pacer;

pub use chat_client::{ChatClientConfig, ChatCompletionClient, SYSTEM_INSTRUCTION};
pub use mock_text_generator::MockTextGenerator;
pub use request_pacer::RequestPacer;
