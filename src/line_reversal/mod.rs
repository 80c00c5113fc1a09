/// Line reversal domain - Pure business logic, no I/O
pub mod domain;
pub mod policies;
pub mod services;
