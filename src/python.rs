//! Python bindings for the chordsheet library using PyO3

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::parser::{load_song, parse_song as rust_parse_song};
use crate::song::ParsedSong;
use crate::transforms::{clean, transpose as song_transpose};

pyo3::create_exception!(chordsheet, ValidationError, PyValueError);

/// Parsed chord sheet
#[pyclass(name = "Song")]
#[derive(Clone)]
pub struct PySong {
    inner: ParsedSong,
}

#[pymethods]
impl PySong {
    #[new]
    fn new() -> Self {
        PySong {
            inner: ParsedSong::new(),
        }
    }

    #[staticmethod]
    fn parse(content: &str) -> Self {
        PySong {
            inner: rust_parse_song(content),
        }
    }

    #[staticmethod]
    fn from_file(path: &str) -> PyResult<Self> {
        let inner = load_song(path).map_err(|e| PyIOError::new_err(format!("{:#}", e)))?;
        Ok(PySong { inner })
    }

    fn save(&self, path: &str) -> PyResult<()> {
        let content = self.inner.to_string();
        std::fs::write(path, content)
            .map_err(|e| PyIOError::new_err(format!("Failed to write file '{}': {}", path, e)))
    }

    #[getter]
    fn title(&self) -> Option<String> {
        self.inner.metadata.title.clone()
    }

    #[getter]
    fn artist(&self) -> Option<String> {
        self.inner.metadata.artist.clone()
    }

    #[getter]
    fn capo(&self) -> Option<i32> {
        self.inner.metadata.capo
    }

    #[getter]
    fn key(&self) -> Option<String> {
        self.inner.metadata.key.clone()
    }

    #[getter]
    fn tempo(&self) -> Option<String> {
        self.inner.metadata.tempo.clone()
    }

    #[getter]
    fn time(&self) -> Option<String> {
        self.inner.metadata.time.clone()
    }

    fn chords(&self) -> Vec<String> {
        self.inner.chords().into_iter().map(str::to_string).collect()
    }

    /// List of (type, label, lines) tuples, lines serialized as text.
    fn sections(&self) -> Vec<(String, Option<String>, Vec<String>)> {
        crate::sections::segment(&self.inner)
            .into_iter()
            .map(|section| {
                (
                    section.section_type.to_string(),
                    section.label,
                    section.lines.iter().map(|line| line.to_string()).collect(),
                )
            })
            .collect()
    }

    #[pyo3(signature = (semitones, prefer_sharps=true))]
    fn transpose(&self, semitones: i32, prefer_sharps: bool) -> Self {
        PySong {
            inner: song_transpose::transform(&self.inner, semitones, prefer_sharps),
        }
    }

    fn detect_key(&self) -> Option<String> {
        crate::key::detect_key(self.inner.chords().as_slice())
    }

    fn __len__(&self) -> usize {
        self.inner.lines.len()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Song(title={:?}, key={:?}, lines={})",
            self.title(),
            self.key(),
            self.__len__()
        )
    }
}

/// Parse chord sheet text
#[pyfunction]
fn parse(content: &str) -> PySong {
    PySong::parse(content)
}

/// Load a chord sheet from file
///
/// Raises IOError.
#[pyfunction]
fn load(path: &str) -> PyResult<PySong> {
    PySong::from_file(path)
}

/// Transpose one chord symbol
///
/// Example:
///     chordsheet.transpose_chord("D/F#", 2)  # "E/G#"
#[pyfunction]
#[pyo3(signature = (chord, semitones, prefer_sharps=true))]
fn transpose_chord(chord: &str, semitones: i32, prefer_sharps: bool) -> String {
    crate::transpose::transpose(chord, semitones, prefer_sharps)
}

#[pyfunction]
fn detect_key(chords: Vec<String>) -> Option<String> {
    crate::key::detect_key(chords.as_slice())
}

#[pyfunction]
fn calculate_capo(original_key: &str, target_key: &str) -> u8 {
    crate::key::calculate_capo(original_key, target_key)
}

#[pyfunction]
fn chord_suggestions(key: &str) -> Vec<Vec<String>> {
    crate::key::chord_suggestions(key)
}

/// Check block nesting and chord brackets
///
/// Raises ValidationError.
#[pyfunction]
fn validate(content: &str) -> PyResult<()> {
    crate::validate::validate(content).map_err(|e| ValidationError::new_err(e.to_string()))
}

#[pyfunction]
fn clean_content(content: &str) -> String {
    clean::transform(content)
}

/// ChordPro chord sheet parsing and transposition
///
/// Example:
///     song = chordsheet.parse("{title:Song}\\n[C]Hello [G]world")
///     print(song.transpose(2))
#[pymodule]
fn chordsheet(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySong>()?;
    m.add_function(wrap_pyfunction!(parse, m)?)?;
    m.add_function(wrap_pyfunction!(load, m)?)?;
    m.add_function(wrap_pyfunction!(transpose_chord, m)?)?;
    m.add_function(wrap_pyfunction!(detect_key, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_capo, m)?)?;
    m.add_function(wrap_pyfunction!(chord_suggestions, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(clean_content, m)?)?;

    m.add("ValidationError", m.py().get_type::<ValidationError>())?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
