use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::models::Sample;
use crate::renderer::{self, format_usage};

const BANNER: &str = r"
 ___ _   _ ____   ___  __  __ _   _ ___    _    ____
|_ _| \ | / ___| / _ \|  \/  | \ | |_ _|  / \  / ___|
 | ||  \| \___ \| | | | |\/| |  \| || |  / _ \| |
 | || |\  |___) | |_| | |  | | |\  || | / ___ \ |___
|___|_| \_|____/ \___/|_|  |_|_| \_|___/_/   \_\____|
";

const RUNNING_MESSAGE: &str = "Insomniac is running... preventing sleep mode!";
const SHUTDOWN_MESSAGE: &str = "Insomniac is shutting down...";

/// First terminal row of the refreshed block, just below the banner.
pub fn frame_row() -> u16 {
    // banner, blank line, running message, blank line
    (BANNER.lines().count() + 3) as u16
}

/// The lines of one refreshed block, top to bottom.
pub fn compose_frame(sample: &Sample) -> Vec<String> {
    vec![
        format!("⏳ Running Time: {}", renderer::format_uptime(sample.uptime)),
        format!("⏰ Current Time: {}", sample.wall_clock),
        String::new(),
        format_usage("💻 CPU", 20, sample.cpu_percent),
        format_usage("🖥  RAM", 20, sample.mem_percent),
        format_usage("💾 Disk", 19, sample.disk_percent),
        String::new(),
        renderer::format_upload(sample.net_upload_kbs),
        renderer::format_download(sample.net_download_kbs),
        String::new(),
        renderer::format_battery(sample.battery_percent, sample.battery_status),
    ]
}

/// Clears the screen and prints the banner.
pub fn paint_banner<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        cursor::MoveTo(0, 0),
        cursor::Hide,
        Print(BANNER),
        Print("\n"),
        Print(RUNNING_MESSAGE),
        Print("\n")
    )?;
    out.flush()
}

/// Repaints the block in place without clearing the rest of the screen.
pub fn paint_frame<W: Write>(out: &mut W, sample: &Sample) -> io::Result<()> {
    queue!(out, cursor::MoveTo(0, frame_row()))?;
    for line in compose_frame(sample) {
        queue!(out, Print(line), Clear(ClearType::UntilNewLine), Print("\n"))?;
    }
    out.flush()
}

pub fn paint_farewell<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Print("\n"), Print(SHUTDOWN_MESSAGE), Print("\n"), cursor::Show)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BatteryStatus;
    use std::time::Duration;

    fn sample() -> Sample {
        Sample {
            cpu_percent: 50.0,
            mem_percent: 25.0,
            disk_percent: 75.0,
            net_upload_kbs: 1.0,
            net_download_kbs: 2.0,
            battery_percent: 0.0,
            battery_status: BatteryStatus::Unknown,
            uptime: Duration::from_secs(3),
            wall_clock: "12:34:56".to_string(),
        }
    }

    #[test]
    fn test_frame_layout() {
        let lines = compose_frame(&sample());

        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "⏳ Running Time: 3s");
        assert_eq!(lines[1], "⏰ Current Time: 12:34:56");
        assert!(lines[2].is_empty());
        assert!(lines[3].starts_with("💻 CPU:"));
        assert!(lines[4].starts_with("🖥  RAM:"));
        assert!(lines[5].starts_with("💾 Disk:"));
        assert!(lines[6].is_empty());
        assert!(lines[7].starts_with("🌐 Upload:"));
        assert!(lines[8].starts_with("🌐 Download:"));
        assert!(lines[9].is_empty());
        assert!(lines[10].starts_with("🔋 Battery:"));
        assert!(lines[10].ends_with("N/A"));
    }

    #[test]
    fn test_frame_paints_below_banner() {
        let mut out = Vec::new();
        paint_frame(&mut out, &sample()).unwrap();
        let text = String::from_utf8(out).unwrap();

        // CSI row;col H, one-based
        assert!(text.starts_with(&format!("\x1b[{};1H", frame_row() + 1)));
        assert!(text.contains("⏳ Running Time: 3s"));
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn test_banner_clears_screen() {
        let mut out = Vec::new();
        paint_banner(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains(RUNNING_MESSAGE));
    }
}
