pub mod chat;
pub mod home;
pub mod team;

pub use chat::ChatView;
pub use home::HomeView;
pub use team::TeamSection;
