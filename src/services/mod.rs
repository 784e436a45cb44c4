pub mod renderer;
pub mod session;
pub mod session_registry;

pub use renderer::RenderService;
pub use session::{PickerSession, SessionError, TappedSwatch, VisibleRow};
pub use session_registry::{
    InMemorySessions, SessionId, SessionRegistry, DEFAULT_MAX_SESSIONS,
};
