use anyhow::Result;
use mower_kata::{
    run_mower_kata, ConfigurationProcessor, KataError, OutputFormat, ParseError, ParseErrorKind,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_input(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    Ok(file)
}

#[tokio::test]
async fn test_single_mower_bounded_by_walls() -> Result<()> {
    let file = write_input("55\n12N\nLFRFF\n")?;
    let mut out = Vec::new();
    let mut err = Vec::new();

    run_mower_kata(file.path(), OutputFormat::Text, &mut out, &mut err).await?;

    assert_eq!(out, vec!["04N"]);
    assert!(err.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_sample_file() -> Result<()> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/sample.txt");
    let mut out = Vec::new();
    let mut err = Vec::new();

    let summary = run_mower_kata(&path, OutputFormat::Text, &mut out, &mut err).await?;

    assert_eq!(summary.lines_read, 5);
    assert_eq!(out, vec!["13N", "51E"]);
    Ok(())
}

#[tokio::test]
async fn test_invalid_instruction_character() -> Result<()> {
    let file = write_input("55\n12N\nLMRF\n")?;
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = run_mower_kata(file.path(), OutputFormat::Text, &mut out, &mut err).await;

    match result {
        Err(KataError::Parse(ParseError { kind, line })) => {
            assert_eq!(kind, ParseErrorKind::Instruction);
            assert_eq!(line, 3);
        }
        other => panic!("expected an instruction error, got {:?}", other),
    }
    assert!(out.is_empty());
    assert_eq!(
        err,
        vec!["Line 3 - An error occurred while parsing mower instructions."]
    );
    Ok(())
}

#[tokio::test]
async fn test_lawn_error_halts_before_any_mower() -> Result<()> {
    let file = write_input("55A\n12N\nLRF\n33E\nFRL\n")?;
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = run_mower_kata(file.path(), OutputFormat::Text, &mut out, &mut err).await;

    assert!(matches!(
        result,
        Err(KataError::Parse(ParseError {
            kind: ParseErrorKind::Lawn,
            line: 1
        }))
    ));
    assert!(out.is_empty());
    assert_eq!(err.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_missing_file_never_reaches_parser() -> Result<()> {
    let dir = TempDir::new()?;
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = run_mower_kata(
        &dir.path().join("file-does-not-exist.txt"),
        OutputFormat::Text,
        &mut out,
        &mut err,
    )
    .await;

    assert!(matches!(result, Err(KataError::FileDoesNotExist { .. })));
    assert!(out.is_empty());
    assert!(!err.iter().any(|line| line.starts_with("Line ")));
    Ok(())
}

#[tokio::test]
async fn test_invalid_utf8_is_a_technical_error() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"55\n12N\n\xff\xfe\n")?;
    let mut out = Vec::new();
    let mut err = Vec::new();

    let result = run_mower_kata(file.path(), OutputFormat::Text, &mut out, &mut err).await;

    let error = result.expect_err("invalid UTF-8 must fail");
    assert!(matches!(error, KataError::IoError(_)));
    assert_eq!(error.exit_code(), 7);
    Ok(())
}

#[tokio::test]
async fn test_json_output() -> Result<()> {
    let mut processor =
        ConfigurationProcessor::with_format(Vec::new(), Vec::new(), OutputFormat::Json);
    processor
        .process("55\n12N\nLFLFLFLFF\n33E\nFFRFFRFRRF\n".as_bytes())
        .await?;
    let (out, _) = processor.into_writers();

    let reports: Vec<serde_json::Value> = out
        .iter()
        .map(|line| serde_json::from_str(line))
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(reports[0], serde_json::json!({"x": 1, "y": 3, "orientation": "N"}));
    assert_eq!(reports[1], serde_json::json!({"x": 5, "y": 1, "orientation": "E"}));
    Ok(())
}
