fn main() {
    if let Err(err) = placeholder_svg::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
