pub mod cancel;
pub mod capability;
pub mod contact;
pub mod nav;
pub mod palette;
pub mod reveal;
pub mod sparkle;
pub mod tone;
pub mod typewriter;

pub use cancel::*;
pub use capability::*;
pub use contact::*;
pub use nav::*;
pub use palette::*;
pub use reveal::*;
pub use sparkle::*;
pub use tone::*;
pub use typewriter::*;
