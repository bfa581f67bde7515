// Minimal test to verify the core functionality works

use optical_markers::{
    config::Config,
    effects::EffectFilter,
    report::{EditRow, ReportLoader},
    timecode::{median_frame, TimecodeCodec},
    ReportTransformer,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎬 Testing Optical-Markers Core Functionality");

    // Test 1: Timecodes
    println!("\n1. Testing Timecode Codec...");
    let codec = TimecodeCodec::default();
    let start = codec.parse("01:00:00:00")?;
    let end = codec.parse("01:00:00:12")?;
    let midpoint = codec.format(median_frame(start, end));
    println!("   {} .. {} -> {}", start, end, midpoint);
    assert_eq!(midpoint, "01:00:00:06");

    // Test 2: Effect names
    println!("\n2. Testing Effect Filter...");
    let filter = EffectFilter::default();
    println!("   Timewarp -> {}", filter.normalize("Timewarp"));
    println!("   Submaster excluded: {}", filter.is_excluded("Submaster"));
    assert!(filter.is_excluded("Submaster"));

    // Test 3: CSV parsing
    println!("\n3. Testing Report Loader...");
    let csv = "Start Timecode,End Timecode,Track,Effect Name\n\
               01:00:00:00,01:00:00:12,V1,Timewarp\n\
               01:00:00:06,01:00:00:06,V1,3DWarp\n\
               01:00:02:00,01:00:03:00,V2,Submaster\n\
               aa:bb:cc:dd,01:00:04:00,V1,Resize\n";
    let report = ReportLoader::parse_str(csv, &Config::default().report)?;
    println!("   Parsed {} rows", report.len());

    // Test 4: Full transformation
    println!("\n4. Testing Report Transformer...");
    let result = ReportTransformer::default().transform_rows(&report.rows);
    for warning in &result.warnings {
        println!("   ⚠️  {}", warning);
    }
    println!("   Marker list:\n{}", result.text());
    assert_eq!(result.markers.len(), 1);

    // Test 5: Hand-built rows
    println!("\n5. Testing hand-built rows...");
    let rows = vec![EditRow::new("00:59:59:23", "01:00:00:01", "V3", "Motion Effect")];
    let result = ReportTransformer::default().transform_rows(&rows);
    println!("   {}", result.text());

    println!("\n🎉 All tests passed! Optical-Markers core is working.");

    Ok(())
}
