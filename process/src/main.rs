#[macro_use]
extern crate tracing;

use ripple_common::{TARGET_SIDE, coe, fit};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn default_output() -> PathBuf {
    PathBuf::from("image.coe")
}

fn default_preview() -> PathBuf {
    PathBuf::from("image_64x64_preview.png")
}

#[derive(argh::FromArgs)]
/// Convert a photo into a 64x64 block-ram initialization file
struct Args {
    #[argh(positional)]
    /// path to the source photo
    input: PathBuf,

    #[argh(option, default = "default_output()")]
    /// path of the generated initialization vector file
    output: PathBuf,

    #[argh(option, default = "default_preview()")]
    /// path of the downscaled preview image
    preview: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    let photo = image::open(&args.input)?.to_luma8();
    let grid = fit::fit_square(&photo, TARGET_SIDE as u32);

    // what the fpga will see
    grid.to_image().save(&args.preview)?;
    info!("saved preview as {}", args.preview.display());

    let file = File::create(&args.output)?;
    let mut out = BufWriter::new(file);
    coe::write(&mut out, grid.as_bytes())?;
    out.flush()?;

    info!(
        "generated {} ({} pixels)",
        args.output.display(),
        grid.as_bytes().len()
    );

    Ok(())
}
