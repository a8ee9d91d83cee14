/*!
# Argot: Debug

This example parses any arbitrary arguments fed to it and displays the
options it finds.

Set `RUST_LOG=argot=trace` to see the library's own logging too.
*/

use tracing_subscriber::EnvFilter;



fn main() {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();

	let cli = argot::args();
	println!("\x1b[2mRAW:\x1b[0m");
	println!("{:?}", &*cli);

	for opt in cli.options() {
		println!("\x1b[2m-----\x1b[0m");
		println!("    main: {:?}", opt.main());
		println!("     key: {:?}", opt.key());
		println!("   value: {:?}", opt.value());
		println!("    args: {:?}", opt.arguments().collect::<Vec<_>>());
	}
	println!("\x1b[2m-----\x1b[0m");

	// A first-match lookup, for the error path.
	if let Err(e) = cli.find_first_option("help") {
		eprintln!("{e}");
		std::process::exit(e.exit_code());
	}
}
