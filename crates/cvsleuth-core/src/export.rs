/// CSV and JSON export of analysis reports.
///
/// Three CSV tables, one per result shape:
/// - `word,count` for the top words;
/// - `category,keyword,count` for keyword hits (one row per keyword, dense);
/// - `year,count` for the timeline.
///
/// Each writer has a matching reader so exported files can be loaded back.
/// Writers take any `io::Write`; [`export_report`] writes all tables plus a
/// JSON copy of the whole report into a directory. Exports of several
/// reports go through an [`ExportBatch`] so documents sharing a stem
/// (`jane.pdf`, `jane.docx`) get distinct file names.
use crate::analysis::{CategoryHits, CategoryResult, KeywordCount, WordCount, YearCount};
use crate::error::AnalysisError;
use crate::report::AnalysisReport;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Serialize, Deserialize)]
struct CategoryRow {
    category: String,
    keyword: String,
    count: u64,
}

#[derive(Debug, Serialize, Deserialize)]
struct YearRow {
    year: u16,
    count: u64,
}

pub fn write_words_csv<W: Write>(out: W, words: &[WordCount]) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(out);
    for word in words {
        writer.serialize(word)?;
    }
    if words.is_empty() {
        writer.write_record(["word", "count"])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn read_words_csv<R: Read>(input: R) -> Result<Vec<WordCount>, AnalysisError> {
    let mut reader = csv::Reader::from_reader(input);
    let rows = reader.deserialize().collect::<Result<Vec<WordCount>, _>>()?;
    Ok(rows)
}

pub fn write_categories_csv<W: Write>(
    out: W,
    categories: &CategoryResult,
) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["category", "keyword", "count"])?;
    for hits in categories {
        for kw in &hits.keywords {
            writer.write_record([
                hits.category.as_str(),
                kw.keyword.as_str(),
                kw.count.to_string().as_str(),
            ])?;
        }
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Rebuild a `CategoryResult`, keeping categories and keywords in file order.
pub fn read_categories_csv<R: Read>(input: R) -> Result<CategoryResult, AnalysisError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut result: CategoryResult = Vec::new();
    for row in reader.deserialize() {
        let row: CategoryRow = row?;
        let keyword = KeywordCount {
            keyword: row.keyword,
            count: row.count,
        };
        match result.iter_mut().find(|c| c.category == row.category) {
            Some(hits) => hits.keywords.push(keyword),
            None => result.push(CategoryHits {
                category: row.category,
                keywords: vec![keyword],
            }),
        }
    }
    Ok(result)
}

pub fn write_years_csv<W: Write>(out: W, years: &YearCount) -> Result<(), AnalysisError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["year", "count"])?;
    for (&year, &count) in years {
        writer.write_record([year.to_string(), count.to_string()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn read_years_csv<R: Read>(input: R) -> Result<YearCount, AnalysisError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut years = YearCount::new();
    for row in reader.deserialize() {
        let row: YearRow = row?;
        *years.entry(row.year).or_insert(0) += row.count;
    }
    Ok(years)
}

pub fn write_report_json<W: Write>(out: W, report: &AnalysisReport) -> Result<(), AnalysisError> {
    serde_json::to_writer_pretty(out, report)?;
    Ok(())
}

pub fn read_report_json<R: Read>(input: R) -> Result<AnalysisReport, AnalysisError> {
    Ok(serde_json::from_reader(input)?)
}

/// Paths written by [`export_report`] or [`ExportBatch::export`].
#[derive(Debug, Clone)]
pub struct ExportedFiles {
    pub words: PathBuf,
    pub categories: PathBuf,
    pub years: PathBuf,
    pub report: PathBuf,
}

impl ExportedFiles {
    pub fn all(&self) -> [&Path; 4] {
        [&self.words, &self.categories, &self.years, &self.report]
    }
}

/// Write `<stem>_words.csv`, `<stem>_categories.csv`, `<stem>_years.csv`
/// and `<stem>_report.json` into `dir`, creating it if needed.
pub fn export_report(report: &AnalysisReport, dir: &Path) -> Result<ExportedFiles, AnalysisError> {
    ExportBatch::new(dir).export(report)
}

/// Exports several reports into one directory.
///
/// The first report with a given stem keeps the plain name; later ones
/// become `<stem>_2`, `<stem>_3`, ... Stems are compared case-insensitively
/// since the target file system may be.
#[derive(Debug)]
pub struct ExportBatch {
    dir: PathBuf,
    used: HashSet<String>,
}

impl ExportBatch {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            used: HashSet::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the four export files for `report`.
    pub fn export(&mut self, report: &AnalysisReport) -> Result<ExportedFiles, AnalysisError> {
        let stem = self.claim_stem(report.stem());
        write_export(report, &self.dir, &stem)
    }

    fn claim_stem(&mut self, raw: &str) -> String {
        let base = sanitise_stem(raw);
        let mut stem = base.clone();
        let mut n = 2;
        while !self.used.insert(stem.to_lowercase()) {
            stem = format!("{base}_{n}");
            n += 1;
        }
        stem
    }
}

fn write_export(
    report: &AnalysisReport,
    dir: &Path,
    stem: &str,
) -> Result<ExportedFiles, AnalysisError> {
    std::fs::create_dir_all(dir).map_err(|source| AnalysisError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let files = ExportedFiles {
        words: dir.join(format!("{stem}_words.csv")),
        categories: dir.join(format!("{stem}_categories.csv")),
        years: dir.join(format!("{stem}_years.csv")),
        report: dir.join(format!("{stem}_report.json")),
    };

    write_words_csv(create(&files.words)?, &report.top_words)?;
    write_categories_csv(create(&files.categories)?, &report.categories)?;
    write_years_csv(create(&files.years)?, &report.years)?;

    let mut json = create(&files.report)?;
    write_report_json(&mut json, report)?;
    json.flush().map_err(|source| AnalysisError::Io {
        path: files.report.clone(),
        source,
    })?;

    info!("Exported {} to {} as {stem}", report.source, dir.display());
    Ok(files)
}

fn create(path: &Path) -> Result<BufWriter<File>, AnalysisError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Replace characters that are awkward in file names.
fn sanitise_stem(stem: &str) -> String {
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "document".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_round_trip() {
        let words = vec![WordCount::new("python", 4), WordCount::new("sql", 2)];
        let mut buf = Vec::new();
        write_words_csv(&mut buf, &words).unwrap();
        assert!(String::from_utf8_lossy(&buf).starts_with("word,count\n"));
        assert_eq!(read_words_csv(buf.as_slice()).unwrap(), words);
    }

    #[test]
    fn empty_words_still_have_a_header() {
        let mut buf = Vec::new();
        write_words_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf.clone()).unwrap(), "word,count\n");
        assert!(read_words_csv(buf.as_slice()).unwrap().is_empty());
    }

    #[test]
    fn categories_round_trip_with_awkward_names() {
        let categories = vec![
            CategoryHits {
                category: "Data & Analytics".into(),
                keywords: vec![
                    KeywordCount {
                        keyword: "power bi".into(),
                        count: 1,
                    },
                    KeywordCount {
                        keyword: "tableau".into(),
                        count: 0,
                    },
                ],
            },
            CategoryHits {
                category: "Languages, misc".into(),
                keywords: vec![KeywordCount {
                    keyword: "c#".into(),
                    count: 3,
                }],
            },
        ];
        let mut buf = Vec::new();
        write_categories_csv(&mut buf, &categories).unwrap();
        assert_eq!(read_categories_csv(buf.as_slice()).unwrap(), categories);
    }

    #[test]
    fn years_round_trip() {
        let years = YearCount::from([(1990, 1), (2015, 3)]);
        let mut buf = Vec::new();
        write_years_csv(&mut buf, &years).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert_eq!(text, "year,count\n1990,1\n2015,3\n");
        assert_eq!(read_years_csv(buf.as_slice()).unwrap(), years);
    }

    #[test]
    fn malformed_csv_is_an_export_error() {
        let err = read_years_csv("year,count\nnineteen,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, AnalysisError::Csv(_)));
    }

    fn report_for(source: &str, text: &str) -> AnalysisReport {
        crate::Analyzer::with_defaults()
            .analyze_text(source, crate::DocumentFormat::Txt, text)
            .unwrap()
    }

    #[test]
    fn same_stem_in_one_batch_gets_distinct_files() {
        let tmp = tempfile::TempDir::new().unwrap();
        let first = report_for("jane.txt", "python python rust");
        let second = report_for("jane.docx", "java");

        let mut batch = ExportBatch::new(tmp.path());
        let f1 = batch.export(&first).unwrap();
        let f2 = batch.export(&second).unwrap();

        for (a, b) in f1.all().iter().zip(f2.all()) {
            assert_ne!(a, &b);
        }
        assert!(f1.words.ends_with("jane_words.csv"));
        assert!(f2.words.ends_with("jane_2_words.csv"));

        let words = read_words_csv(File::open(&f1.words).unwrap()).unwrap();
        assert_eq!(
            words,
            vec![WordCount::new("python", 2), WordCount::new("rust", 1)]
        );
        let words = read_words_csv(File::open(&f2.words).unwrap()).unwrap();
        assert_eq!(words, vec![WordCount::new("java", 1)]);
    }

    #[test]
    fn stem_collisions_ignore_case_and_keep_counting() {
        let mut batch = ExportBatch::new("unused");
        assert_eq!(batch.claim_stem("Jane"), "Jane");
        assert_eq!(batch.claim_stem("jane"), "jane_2");
        assert_eq!(batch.claim_stem("JANE"), "JANE_3");
        assert_eq!(batch.claim_stem("bob"), "bob");
    }

    #[test]
    fn stems_are_made_file_safe() {
        assert_eq!(sanitise_stem("Jane Doe CV"), "Jane_Doe_CV");
        assert_eq!(sanitise_stem("a/b"), "a_b");
        assert_eq!(sanitise_stem(""), "document");
    }
}
