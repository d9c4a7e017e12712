pub mod backend;
pub mod echo;
pub mod factory;
pub mod interface;
pub mod lines;
pub mod model;

pub use backend::ModelBackend;
pub use echo::EchoTranslator;
pub use factory::TranslatorFactory;
pub use interface::{TranslateInterface, TranslateRequest, TranslateResponse};
pub use model::{ModelTranslator, DEFAULT_MAX_LENGTH};
