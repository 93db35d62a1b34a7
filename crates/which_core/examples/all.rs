//! Finds all instances of an executable.

fn main() {
    match which_core::which("foobar").all() {
        Some(paths) => {
            println!("The 'foobar' command is available at these locations:");
            for path in paths {
                println!("- {}", path.display());
            }
        }
        None => eprintln!("The 'foobar' command cannot be found."),
    }
}
