mod factory;
mod lock;
mod mutex;
#[cfg(feature = "thread-local")]
mod thread_local;

pub use factory::*;
pub use lock::*;
#[cfg_attr(docsrs, doc(cfg(feature = "thread-local")))]
#[cfg(feature = "thread-local")]
pub use thread_local::*;
