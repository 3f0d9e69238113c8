// CIN extraction demo: run the pipeline on one document image and print the
// extracted fields.

use std::path::PathBuf;
use std::process;

use cinscan::models::{ExtractedFields, OcrConfig};
use cinscan::DocumentExtractor;
use clap::Parser;

#[derive(Parser)]
#[command(name = "cinscan", about = "Extract identity fields from a CIN image")]
struct Args {
    /// Path to the document image (any raster format).
    image: PathBuf,

    /// Tesseract language set.
    #[arg(long, default_value = "eng+fra")]
    languages: String,
}

fn print_report(fields: &ExtractedFields) {
    println!("\n===============================================");
    println!("        CIN EXTRACTION REPORT");
    println!("===============================================\n");

    println!("  Country:     {}", display(&fields.pays));
    println!("  CIN:         {}", display(&fields.cin));
    println!("  Surname:     {}", display(&fields.nom));
    println!("  Given name:  {}", display(&fields.prenom));
    println!("  Birth date:  {}", display(&fields.date_naissance));
    println!("  Birth place: {}", display(&fields.lieu_naissance));

    if fields.raw_text.is_empty() {
        println!("\nNo text was recognized in the image.");
    } else {
        println!("\nTranscript:\n  {}", fields.raw_text);
    }
}

fn display(value: &str) -> &str {
    if value.is_empty() {
        "(not found)"
    } else {
        value
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = OcrConfig {
        languages: args.languages,
        ..OcrConfig::default()
    };
    let extractor = DocumentExtractor::with_config(config);

    match extractor.extract_from_file(&args.image) {
        Ok(fields) => print_report(&fields),
        Err(err) => {
            eprintln!("Error extracting document: {}", err);
            process::exit(1);
        }
    }
}
