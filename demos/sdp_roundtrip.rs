use std::error::Error;
use std::io::Read;

use sdpio::{stringify, ParseOptions, Parser};

fn main() -> Result<(), Box<dyn Error>> {
    simple_logger::init_with_level(log::Level::Warn)?;

    // Read SDP from the file named on the command line, or stdin
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let parser = Parser::new(ParseOptions::from_env()?);
    let sdp = parser.parse(&text)?;

    println!("Session: {} (version {})", sdp.session_name, sdp.origin.session_version);
    println!("Origin: {} @ {}", sdp.origin.username, sdp.origin.address);
    for time in &sdp.times {
        match time.start_datetime() {
            Some(start) => println!("  Starts: {}", start),
            None => println!("  Starts: unbounded"),
        }
    }
    for (index, media) in sdp.media.iter().enumerate() {
        println!(
            "Media {}: {} port {} {} formats {:?}",
            index, media.media_type, media.port, media.transport, media.formats
        );
        for rtpmap in media.attributes_named("rtpmap") {
            println!("  rtpmap: {}", rtpmap.value.as_deref().unwrap_or_default());
        }
    }

    println!("\nCanonical form:\n{}", stringify(&sdp));
    Ok(())
}
