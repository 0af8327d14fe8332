mod gemini_client;
mod llm_client_factory;
mod llm_translator;
mod openai_chat_client;

pub use gemini_client::{DEFAULT_GEMINI_MODEL, GeminiClient};
pub use llm_client_factory::create_llm_client;
pub use llm_translator::{LlmTranslator, language_name};
pub use openai_chat_client::{ChatAuth, OpenAiChatClient};
