//! Domain layer: the values exchanged during a confirmation and the ports
//! through which the SDK, the payments API and the host UI are reached.

pub mod confirmation;
pub mod intent;
pub mod outcome;
pub mod ports;
pub mod request;
