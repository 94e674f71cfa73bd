use std::process;

fn main() {
    let width = match mandel_zoom::parse_width(std::env::args_os()) {
        Ok(width) => width,
        Err(err) => {
            eprint!("{err}");
            process::exit(1);
        }
    };

    if let Err(err) = mandel_zoom::run_viewer(width) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
