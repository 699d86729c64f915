use mcd_cmd::{run, ChartKind, Command};
use std::fs;
use std::path::PathBuf;

const CATALOG: &str = "\
artist_name,artist_popularity,artist_followers,track_popularity,track_duration_min,explicit,artist_genres,album_release_date
Drake,95,90000000,80,3.5,TRUE,hip hop,2015-07-31
Drake,95,90000000,70,4.5,false,hip hop,2016-04-29
Taylor Swift,100,100000000,90,4.0,false,pop,2014-10-27
Indie Band,40,1200,20,5.0,false,,2010
,88,10,50,3.0,false,pop,2012
Broken,not-a-number,10,50,3.0,false,pop,2012
";

fn write_catalog(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("catalog.csv");
    fs::write(&path, CATALOG).unwrap();
    path
}

#[test]
fn render_writes_three_charts_in_two_rows() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_catalog(&dir);
    let out = dir.path().join("dashboard.html");

    run(Command::Render {
        data: Some(data),
        out: out.clone(),
        config: None,
        width: Some(1000.0),
        height: Some(800.0),
        seed: Some(11),
    })
    .unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<svg id="bar-svg" xmlns="http://www.w3.org/2000/svg" width="1000" height="400""#));
    assert!(html.contains(r#"<svg id="scatter-svg" xmlns="http://www.w3.org/2000/svg" width="500" height="400""#));
    assert!(html.contains(r#"<svg id="parallel-svg""#));
    assert!(!html.contains("stream-svg"));
    // Drake and Taylor Swift clear the popularity threshold
    assert_eq!(html.matches("<circle").count(), 2);
    assert_eq!(html.matches("<polyline").count(), 2);
}

#[test]
fn render_with_missing_data_still_writes_blank_charts() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("dashboard.html");

    run(Command::Render {
        data: Some(dir.path().join("missing.csv")),
        out: out.clone(),
        config: None,
        width: None,
        height: None,
        seed: None,
    })
    .unwrap();

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains(r#"<svg id="bar-svg""#));
    assert!(!html.contains("<rect"));
    assert!(!html.contains("<circle"));
}

#[test]
fn chart_command_writes_a_streamgraph() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_catalog(&dir);
    let out = dir.path().join("stream.svg");

    run(Command::Chart {
        kind: ChartKind::Stream,
        data: Some(data),
        out: out.clone(),
        config: None,
        width: Some(800.0),
        height: Some(400.0),
        seed: None,
    })
    .unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.starts_with(r#"<svg id="stream-svg""#));
    assert_eq!(svg.matches("<polygon").count(), 4);
    assert!(svg.contains("Artists"));
}

#[test]
fn settings_file_feeds_the_chart_command() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_catalog(&dir);
    let settings = dir.path().join("settings.json");
    fs::write(
        &settings,
        format!(
            r#"{{"data_path": {:?}, "width": 320, "height": 240, "popularity_threshold": 99}}"#,
            data.to_string_lossy()
        ),
    )
    .unwrap();
    let out = dir.path().join("scatter.svg");

    run(Command::Chart {
        kind: ChartKind::Scatter,
        data: None,
        out: out.clone(),
        config: Some(settings),
        width: None,
        height: None,
        seed: Some(1),
    })
    .unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains(r#"width="320" height="240""#));
    // only Taylor Swift reaches 99
    assert_eq!(svg.matches("<circle").count(), 1);
}

#[test]
fn summary_fails_on_a_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = run(Command::Summary {
        kind: ChartKind::Bar,
        data: Some(dir.path().join("missing.csv")),
        config: None,
    });
    assert!(result.is_err());
}
