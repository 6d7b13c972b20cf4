mod digestable;
mod errors;
mod modexp;
mod mpi;
mod verify;

pub use crate::digestable::Digestable;
pub use crate::errors::Rejection;
pub use crate::modexp::Checked;
pub use crate::modexp::ModExp;
pub use crate::modexp::Trusted;
pub use crate::mpi::barrett_factor;
pub use crate::verify::pkcs1_v15_verify;
pub use crate::verify::pkcs1_v15_verify_prevalidated;
pub use crate::verify::pkcs1_v15_verify_with;
