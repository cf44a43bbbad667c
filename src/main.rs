#[macro_use]
extern crate tracing;

use ripple_common::{PIXELS, TARGET_SIDE, blur, coe, recv};
use std::{fs, path::PathBuf, thread, time::Duration};

mod render;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const DEFAULT_PORT: &str = "/dev/ttyUSB0";

// the fpga streams two bytes per pixel
const BYTES_EXPECTED: usize = PIXELS * 2;

/// timeout applied to every individual port read
const READ_TIMEOUT: Duration = Duration::from_millis(200);

/// grace period after opening the port before the first read
const SETTLE_DELAY: Duration = Duration::from_millis(300);

const CHUNK_SIZE: usize = 256;

fn default_coe() -> PathBuf {
    PathBuf::from("image.coe")
}

fn default_output() -> PathBuf {
    PathBuf::from("gaussian_output.png")
}

fn default_preview() -> PathBuf {
    PathBuf::from("gaussian_preview.png")
}

#[derive(argh::FromArgs)]
/// Receive a processed frame from the FPGA and blur the reference image for comparison
struct Args {
    #[argh(option, default = "DEFAULT_PORT.to_owned()")]
    /// serial port the fpga is connected to
    port: String,

    #[argh(option, default = "115200")]
    /// baud rate of the serial link
    baud: u32,

    #[argh(option, default = "BYTES_EXPECTED")]
    /// number of bytes to wait for
    expected: usize,

    #[argh(option, default = "20")]
    /// seconds to wait for the transfer before giving up
    timeout: u64,

    #[argh(option, default = "default_coe()")]
    /// initialization vector file holding the reference image
    coe: PathBuf,

    #[argh(option, default = "default_output()")]
    /// path for the blurred grayscale result
    output: PathBuf,

    #[argh(option, default = "default_preview()")]
    /// path for the rendered preview with the intensity scale
    preview: PathBuf,

    #[argh(switch)]
    /// skip the serial capture and only run the reference blur
    skip_capture: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args: Args = argh::from_env();

    if !args.skip_capture {
        info!("opening serial port {}..", args.port);
        let mut port = serialport::new(&args.port, args.baud)
            .timeout(READ_TIMEOUT)
            .open()?;
        thread::sleep(SETTLE_DELAY);

        info!("waiting for {} bytes from the fpga..", args.expected);
        let capture = recv::capture(
            &mut port,
            &recv::RecvConfig {
                expected: args.expected,
                chunk: CHUNK_SIZE,
                deadline: Duration::from_secs(args.timeout),
            },
        )?;
        drop(port);

        if capture.complete() {
            info!(
                "received all {} bytes in {:.1?}",
                capture.data.len(),
                capture.elapsed
            );
        } else {
            warn!(
                "timeout! received only {}/{} bytes",
                capture.data.len(),
                capture.expected
            );
        }
    }

    let text = fs::read_to_string(&args.coe)?;
    let grid = coe::parse(&text, TARGET_SIDE)?;

    let blurred = blur::gaussian3(&grid);
    blurred.to_image().save(&args.output)?;
    info!("saved {}", args.output.display());

    render::render_preview(&blurred).save(&args.preview)?;
    info!("saved {}", args.preview.display());

    Ok(())
}
