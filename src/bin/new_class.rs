//! Generates the five source files of a new library class.

use synqgen::{
    cli::{get_args, ClassArgs},
    emitter::OutputLayout,
    error::{default_error_handler, Result},
    generator::{generate_class, plan_class, GenerationRequest},
    license::LicenseHeader,
    logger::init_logger,
    profile::LibraryProfile,
    renderer::MiniJinjaRenderer,
};

fn main() {
    let args = get_args::<ClassArgs>();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: ClassArgs) -> Result<()> {
    let renderer = MiniJinjaRenderer::new()?;
    let profile = LibraryProfile::default();
    let license = LicenseHeader::current(&renderer, &profile)?;
    let layout = OutputLayout::resolve(args.root)?;
    let request = GenerationRequest::new(args.class_name, args.base_class);

    if args.dry_run {
        for artifact in plan_class(&renderer, &profile, &license, &request)? {
            println!("{}", layout.target(&artifact).display());
        }
        return Ok(());
    }

    generate_class(&renderer, &profile, &license, &layout, &request)?;
    Ok(())
}
