//! Domain layer: the report types, the wire records they are built from and the ports
//! through which upstream data enters.

pub mod event;
pub mod payment;
pub mod ports;
pub mod report;
pub mod survey;
