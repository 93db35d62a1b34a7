//! Finds all instances of an executable and reports them one at a time.

fn main() {
    println!("The 'foobar' command is available at these locations:");
    for path in &which_core::which("foobar") {
        println!("- {}", path.display());
    }
}
