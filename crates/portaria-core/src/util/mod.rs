pub mod wallclock;
