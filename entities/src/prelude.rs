pub use super::music::Entity as Music;
