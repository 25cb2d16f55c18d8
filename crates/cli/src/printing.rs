use helixvault_codec::{Composition, Symbol};
use helixvault_vault::{DecodedFile, EncodingRecord, FileInfoSource, Inspection};

use crate::defaults::{LIST_PREVIEW_CHARS, TEXT_PREVIEW_CHARS};

fn kib(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

pub fn print_composition(comp: &Composition) {
    println!("\n🔬 Composition");
    println!(
        "  • Adenine (A): {:.1}%  Thymine (T): {:.1}%",
        comp.fraction(Symbol::A) * 100.0,
        comp.fraction(Symbol::T) * 100.0
    );
    println!(
        "  • Guanine (G): {:.1}%  Cytosine (C): {:.1}%",
        comp.fraction(Symbol::G) * 100.0,
        comp.fraction(Symbol::C) * 100.0
    );
    println!("  • GC Content: {:.1}%", comp.gc_content() * 100.0);
    if comp.other() > 0 {
        println!("  • Other characters: {} (decoded as A)", comp.other());
    }
}

pub fn print_record_summary(record: &EncodingRecord) {
    println!("\n✓ Encoding successful");
    println!("{}", "=".repeat(50));
    println!("  • Record ID: {}", record.id);
    println!("  • File Name: {}", record.original_name);
    println!("  • File Type: {}", record.mime_type);
    println!("  • File Size: {}", kib(record.original_len));
    println!("  • Redundancy Level: {}", record.level);
    println!("  • DNA Length: {} bases", record.sequence.len());
    println!("  • Compression: {:.2}:1", record.compression_ratio);
    println!("  • Checksum: {}", record.checksum);
    println!("  • Timestamp: {}", record.timestamp_iso());
    print_composition(&Composition::of(&record.sequence));
}

pub fn print_decoded(file: &DecodedFile) {
    println!("\n✓ Decoding successful");
    println!("{}", "=".repeat(50));
    println!("  • File Name: {}", file.name);
    println!("  • File Type: {}", file.mime_type);
    println!("  • File Size: {}", kib(file.bytes.len() as u64));
    let source = match &file.source {
        FileInfoSource::Record { id } => format!("stored record {id}"),
        FileInfoSource::Sniffed(kind) => format!("file header ({kind:?})"),
        FileInfoSource::Fallback => "unknown, using defaults".to_string(),
    };
    println!("  • File info from: {source}");

    if file.mime_type.starts_with("text/") {
        let text = String::from_utf8_lossy(&file.bytes);
        let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
        println!("\n📄 Preview:");
        println!("{preview}");
    }
}

pub fn print_records(records: &[EncodingRecord]) {
    for record in records {
        let preview: String = record.sequence.chars().take(LIST_PREVIEW_CHARS).collect();
        println!(
            "  • {} | {} | {} | {} | {} bases | {}",
            record.id,
            record.original_name,
            record.mime_type,
            kib(record.original_len),
            record.sequence.len(),
            record.timestamp_iso()
        );
        println!("    {preview}...");
    }
}

pub fn print_inspection(report: &Inspection) {
    println!("\n🔍 Sequence Inspection");
    println!("{}", "=".repeat(50));
    println!("  • Length: {} characters", report.length);
    if report.checksum_valid {
        println!("  • Checksum: OK");
    } else {
        println!("  • Checksum: MISMATCH (decode will fail)");
    }
    match &report.record {
        Some(record) => println!(
            "  • Stored record: {} ({}, {})",
            record.id, record.original_name, record.mime_type
        ),
        None => println!("  • Stored record: none"),
    }
    print_composition(&report.composition);
}
