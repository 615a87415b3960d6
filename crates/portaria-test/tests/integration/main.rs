//! Integration tests for the scheduling engine and its surrounding
//! services.

mod helpers;

mod booking_flow;
mod scheduling;
