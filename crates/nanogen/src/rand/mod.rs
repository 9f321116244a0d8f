mod interface;
mod os_random;
mod small_random;
mod source;
mod thread_random;

pub use interface::*;
pub use os_random::*;
pub use small_random::*;
pub use source::*;
pub use thread_random::*;
