//! Backend Command
//!
//! Report which round-primitive implementations this CPU supports.

/// Print the active backend, then every usable backend.
pub fn print_backend() {
    println!("active: {}", rxaes::active_backend());
    for backend in rxaes::available_backends() {
        println!("  {}", backend.name());
    }
}
