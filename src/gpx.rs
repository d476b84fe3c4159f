//! GPX 1.1 serialization for assembled tracks
//!
//! Builds the document through the quick-xml event writer rather than
//! string templating, so activity names containing XML-special characters
//! come out properly escaped.

use std::io::Write;

use chrono::{Local, TimeZone};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{ConvertError, Result};
use crate::types::TrackPoint;

/// Creator attribute written into the gpx root element
pub const GPX_CREATOR: &str = "nrc2gpx";

const GPX_XMLNS: &str = "http://www.topografix.com/GPX/1/1";
const GPX_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
const GPX_SCHEMA_LOCATION: &str =
    "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd";

// Activity-type code running platforms use for "Run" in trk/type
const TRK_TYPE_RUN: &str = "9";

/// Format an epoch-milliseconds timestamp as `YYYY-MM-DDTHH:MM:SSZ`
///
/// Sub-second precision is truncated. The wall-clock time is computed in
/// the process-local timezone while the literal `Z` suffix is kept: that
/// is what the NRC export tooling has always emitted, and downstream
/// consumers of existing archives expect this exact shape.
pub fn format_timestamp(epoch_ms: i64) -> Result<String> {
    let secs = epoch_ms.div_euclid(1000);
    let datetime = Local
        .timestamp_opt(secs, 0)
        .earliest()
        .ok_or_else(|| ConvertError::Malformed(format!("timestamp {epoch_ms} ms out of range")))?;
    Ok(datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

/// Shortest decimal rendering of a coordinate or elevation value
///
/// Whole numbers keep one decimal place (10.0 renders as "10.0", not
/// "10"), matching the track files this tool has historically produced.
fn format_coordinate(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Serialize a fully resolved track into a GPX 1.1 document string
///
/// The document carries one `metadata/time` with the activity start, one
/// `trk` named after the activity, and a single `trkseg` with one `trkpt`
/// per point in input order.
pub fn write_gpx(name: &str, start_epoch_ms: i64, points: &[TrackPoint]) -> Result<String> {
    let start_time = format_timestamp(start_epoch_ms)?;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 1);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut gpx = BytesStart::new("gpx");
    gpx.push_attribute(("creator", GPX_CREATOR));
    gpx.push_attribute(("version", "1.1"));
    gpx.push_attribute(("xmlns", GPX_XMLNS));
    gpx.push_attribute(("xmlns:xsi", GPX_XSI));
    gpx.push_attribute(("xsi:schemaLocation", GPX_SCHEMA_LOCATION));
    writer.write_event(Event::Start(gpx))?;

    writer.write_event(Event::Start(BytesStart::new("metadata")))?;
    write_text_element(&mut writer, "time", &start_time)?;
    writer.write_event(Event::End(BytesEnd::new("metadata")))?;

    writer.write_event(Event::Start(BytesStart::new("trk")))?;
    write_text_element(&mut writer, "name", name)?;
    write_text_element(&mut writer, "type", TRK_TYPE_RUN)?;

    writer.write_event(Event::Start(BytesStart::new("trkseg")))?;
    for point in points {
        let mut trkpt = BytesStart::new("trkpt");
        trkpt.push_attribute(("lat", format_coordinate(point.latitude).as_str()));
        trkpt.push_attribute(("lon", format_coordinate(point.longitude).as_str()));
        writer.write_event(Event::Start(trkpt))?;
        write_text_element(&mut writer, "ele", &format_coordinate(point.elevation))?;
        write_text_element(&mut writer, "time", &format_timestamp(point.timestamp_ms)?)?;
        writer.write_event(Event::End(BytesEnd::new("trkpt")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("trkseg")))?;

    writer.write_event(Event::End(BytesEnd::new("trk")))?;
    writer.write_event(Event::End(BytesEnd::new("gpx")))?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|err| ConvertError::Malformed(format!("non-UTF-8 document: {err}")))?;
    xml.push('\n');
    Ok(xml)
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> std::io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
