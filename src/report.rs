// Joseph Prichard
// 10/16/2026
// Per symbol summary of a code table and the size it saves over plain text

use serde::Serialize;
use crate::codes::CodeTable;
use crate::frequency::FrequencyTable;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub symbol: char,
    pub count: u64,
    pub code: String,
    // count times the code length
    pub bits: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CodeReport {
    // rows in first-occurrence order of the symbols
    pub rows: Vec<ReportRow>,
    // size of the text as utf-8
    pub raw_bits: u64,
    pub encoded_bits: u64,
}

impl CodeReport {
    pub fn new(freq: &FrequencyTable, codes: &CodeTable) -> CodeReport {
        let mut rows = vec![];
        let mut raw_bits = 0;
        for (symbol, count) in freq.iter() {
            let code = String::from(codes.code(symbol).unwrap_or(""));
            raw_bits = count
                .saturating_mul(8 * symbol.len_utf8() as u64)
                .saturating_add(raw_bits);
            rows.push(ReportRow { symbol, count, bits: count.saturating_mul(code.len() as u64), code });
        }
        CodeReport { rows, raw_bits, encoded_bits: codes.weighted_bits(freq) }
    }

    // encoded size as a percentage of the raw size
    pub fn ratio(&self) -> f64 {
        if self.raw_bits == 0 {
            return 0.0;
        }
        (self.encoded_bits as f64) / (self.raw_bits as f64) * 100.0
    }

    // average code length weighted by count
    pub fn bits_per_symbol(&self) -> f64 {
        let count = self.rows.iter().fold(0u64, |total, row| total.saturating_add(row.count));
        if count == 0 {
            return 0.0;
        }
        (self.encoded_bits as f64) / (count as f64)
    }
}

macro_rules! report_row_format {
    () => ("{:>8}\t{:>8}\t{:>20}\t{:>8}")
}

pub fn list_report(report: &CodeReport) {
    println!(report_row_format!(), "symbol", "count", "code", "bits");
    for row in &report.rows {
        println!(report_row_format!(), format!("{:?}", row.symbol), row.count, &row.code, row.bits);
    }
    println!(
        "raw: {} bits, encoded: {} bits, ratio: {:.2}%, {:.3} bits/symbol",
        report.raw_bits,
        report.encoded_bits,
        report.ratio(),
        report.bits_per_symbol()
    );
    println!();
}
