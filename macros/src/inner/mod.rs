// Internal generators invoked by the library on itself.

pub mod arity;
pub mod tuples;
