mod invocation;

pub use invocation::Invocation;
