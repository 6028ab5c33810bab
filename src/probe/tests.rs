use super::ffprobe::parse_duration_output;
use super::*;
use std::cell::Cell;
use std::path::PathBuf;

struct Fixed(Result<f64, ()>, Cell<usize>);

impl Fixed {
    fn ok(secs: f64) -> Self {
        Self(Ok(secs), Cell::new(0))
    }
    fn failing() -> Self {
        Self(Err(()), Cell::new(0))
    }
}

impl DurationProbe for Fixed {
    fn duration(&self, _path: &Path) -> Result<Duration, ProbeError> {
        self.1.set(self.1.get() + 1);
        match self.0 {
            Ok(secs) => duration_from_secs(secs),
            Err(()) => Err(ProbeError::Parse("N/A".into())),
        }
    }
}

impl DurationProbe for std::rc::Rc<Fixed> {
    fn duration(&self, path: &Path) -> Result<Duration, ProbeError> {
        self.as_ref().duration(path)
    }
}

#[test]
fn parse_duration_output_accepts_ffprobe_format() {
    assert_eq!(
        parse_duration_output("600.000000\n").unwrap(),
        Duration::from_secs(600)
    );
    assert_eq!(
        parse_duration_output("  12.5 ").unwrap(),
        Duration::from_millis(12_500)
    );
}

#[test]
fn parse_duration_output_rejects_garbage_and_negative() {
    assert!(matches!(parse_duration_output("N/A"), Err(ProbeError::Parse(_))));
    assert!(matches!(parse_duration_output(""), Err(ProbeError::Parse(_))));
    assert!(matches!(
        parse_duration_output("-3.0"),
        Err(ProbeError::InvalidDuration(_))
    ));
    assert!(matches!(
        parse_duration_output("nan"),
        Err(ProbeError::InvalidDuration(_))
    ));
}

#[test]
fn ffprobe_probe_reports_missing_program_as_spawn_error() {
    let probe = FfprobeProbe::new("coursedash-no-such-ffprobe-binary");
    let err = probe.duration(Path::new("/tmp/a.mp4")).unwrap_err();
    assert!(matches!(err, ProbeError::Spawn { .. }));
}

#[test]
fn metadata_probe_fails_on_non_media_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.mp4");
    std::fs::write(&path, b"definitely not an mp4 container").unwrap();

    assert!(MetadataProbe.duration(&path).is_err());
    assert!(MetadataProbe.duration(&PathBuf::from("/nonexistent/x.mp4")).is_err());
}

#[test]
fn chain_probe_falls_through_to_first_success() {
    let first = std::rc::Rc::new(Fixed::failing());
    let second = std::rc::Rc::new(Fixed::ok(42.0));
    let third = std::rc::Rc::new(Fixed::ok(1.0));
    let chain = ChainProbe::new(vec![
        Box::new(first.clone()),
        Box::new(second.clone()),
        Box::new(third.clone()),
    ]);

    assert_eq!(
        chain.duration(Path::new("a.mp4")).unwrap(),
        Duration::from_secs(42)
    );
    assert_eq!(first.1.get(), 1);
    assert_eq!(second.1.get(), 1);
    assert_eq!(third.1.get(), 0);
}

#[test]
fn chain_probe_returns_last_error_when_all_fail() {
    let chain = ChainProbe::new(vec![Box::new(Fixed::failing())]);
    assert!(matches!(
        chain.duration(Path::new("a.mp4")),
        Err(ProbeError::Parse(_))
    ));

    let empty = ChainProbe::new(Vec::new());
    assert!(matches!(
        empty.duration(Path::new("a.mp4")),
        Err(ProbeError::Disabled)
    ));
}

#[test]
fn from_settings_none_disables_probing() {
    let settings = ProbeSettings {
        backend: ProbeBackend::None,
        ..ProbeSettings::default()
    };
    let probe = from_settings(&settings);
    assert!(matches!(
        probe.duration(Path::new("a.mp4")),
        Err(ProbeError::Disabled)
    ));
}
