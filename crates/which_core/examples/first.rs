//! Finds the first instance of an executable.

fn main() {
    match which_core::which("foobar").first() {
        Some(path) => println!("The 'foobar' command is located at: {}", path.display()),
        None => eprintln!("The 'foobar' command cannot be found."),
    }
}
