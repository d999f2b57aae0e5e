use getopts::Options;
use log::*;
use raytracer::config::{RenderConfig, MAX_DIMENSION};
use raytracer::error::{Error, Result};
use raytracer::example_scenes;
use raytracer::renderer::Renderer;
use raytracer::ColorRange;
use std::path::PathBuf;
use std::str::FromStr;

struct Args {
    config: RenderConfig,
    scene: String,
    output: PathBuf,
    verbose: bool,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("w", "width", "image width in pixels (default 400)", "PX");
    opts.optopt("h", "height", "image height in pixels (default 400)", "PX");
    opts.optopt("d", "depth", "maximum reflection depth (default 3)", "N");
    opts.optopt(
        "s",
        "scene",
        &format!("scene to render: {}", example_scenes::SCENE_NAMES.join(", ")),
        "NAME",
    );
    opts.optopt("o", "output", "output file, .png or .exr (default output.png)", "FILE");
    opts.optflag("", "unit-colors", "scene colors are in [0, 1] instead of [0, 255]");
    opts.optflag("v", "verbose", "log per-row progress");
    opts.optflag("", "help", "print this help");
    opts
}

fn parse_opt<T: FromStr>(matches: &getopts::Matches, name: &'static str) -> Result<Option<T>> {
    match matches.opt_str(name) {
        None => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| Error::InvalidValue { name, value }),
    }
}

fn parse_args(opts: &Options, argv: &[String]) -> Result<Option<Args>> {
    let matches = opts.parse(argv)?;
    if matches.opt_present("help") {
        return Ok(None);
    }

    let mut config = RenderConfig::default();
    if let Some(w) = parse_opt(&matches, "width")? {
        config.width = w;
    }
    if let Some(h) = parse_opt(&matches, "height")? {
        config.height = h;
    }
    if let Some(d) = parse_opt(&matches, "depth")? {
        config.recursion_depth = d;
    }
    if matches.opt_present("unit-colors") {
        config.color_range = ColorRange::Unit;
    }
    let in_range = 1..=MAX_DIMENSION;
    if !in_range.contains(&config.width) || !in_range.contains(&config.height) {
        return Err(Error::InvalidValue {
            name: "width/height",
            value: format!("{}x{}", config.width, config.height),
        });
    }

    let scene = matches
        .opt_str("scene")
        .unwrap_or_else(|| "spheres".to_string());
    let output = matches
        .opt_str("output")
        .unwrap_or_else(|| "output.png".to_string());
    Ok(Some(Args {
        config,
        scene,
        output: PathBuf::from(output),
        verbose: matches.opt_present("verbose"),
    }))
}

fn run(args: Args) -> Result<()> {
    let scene = example_scenes::by_name(&args.scene).ok_or_else(|| {
        Error::UnknownScene(args.scene.clone(), example_scenes::SCENE_NAMES.join(", "))
    })?;

    let renderer = Renderer::new(args.config);
    let (image, summary) = renderer.render(&scene);
    image.write(&args.output, args.config.color_range)?;
    info!(
        "wrote {} ({} trace calls in {:.3} s)",
        args.output.display(),
        summary.trace_calls,
        summary.elapsed.as_secs_f64()
    );
    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let program = argv.first().cloned().unwrap_or_else(|| "raytracer".to_string());
    let opts = options();
    let usage = opts.usage(&format!("Usage: {} [options]", program));

    let args = match parse_args(&opts, argv.get(1..).unwrap_or(&[])) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{}", usage);
            return;
        }
        Err(e) => {
            eprintln!("{}", e);
            eprint!("{}", usage);
            std::process::exit(2);
        }
    };

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults() {
        let args = parse_args(&options(), &[]).unwrap().unwrap();
        assert_eq!(args.config, RenderConfig::default());
        assert_eq!(args.scene, "spheres");
        assert_eq!(args.output, PathBuf::from("output.png"));
        assert!(!args.verbose);
    }

    #[test]
    fn overrides() {
        let argv = argv(&[
            "-w", "64", "--height", "32", "-d", "0", "-s", "mirrors", "--unit-colors",
        ]);
        let args = parse_args(&options(), &argv).unwrap().unwrap();
        assert_eq!(args.config.width, 64);
        assert_eq!(args.config.height, 32);
        assert_eq!(args.config.recursion_depth, 0);
        assert_eq!(args.config.color_range, ColorRange::Unit);
        assert_eq!(args.scene, "mirrors");
    }

    #[test]
    fn help_and_errors() {
        assert!(parse_args(&options(), &argv(&["--help"])).unwrap().is_none());
        assert!(matches!(
            parse_args(&options(), &argv(&["--width", "wide"])),
            Err(Error::InvalidValue { name: "width", .. })
        ));
        assert!(matches!(
            parse_args(&options(), &argv(&["--width", "0"])),
            Err(Error::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_args(&options(), &argv(&["-w", "70000", "-h", "70000"])),
            Err(Error::InvalidValue { .. })
        ));
        assert!(parse_args(&options(), &argv(&["-w", "32768"])).unwrap().is_some());
        assert!(matches!(
            parse_args(&options(), &argv(&["--bogus"])),
            Err(Error::Options(_))
        ));
    }
}
