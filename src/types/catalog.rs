use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A film stock, with bilingual display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilmStock {
    pub id: String,
    pub name_en: String,
    pub name_zh: String,
    pub brand: String,
    pub iso: u32,
}

/// A developing chemical, with bilingual names and blurbs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Developer {
    pub id: String,
    pub name_en: String,
    pub name_zh: String,
    pub description_en: String,
    pub description_zh: String,
}

/// Tabulated development durations for one film/developer pair, in minutes
/// at box speed / one stop pulled / one stop pushed, all at 20°C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevTimes {
    pub standard_minutes: f64,
    pub pull_one_minutes: f64,
    pub push_one_minutes: f64,
}

/// One row of the process table: which film in which developer, and the times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessEntry {
    pub film_id: String,
    pub developer_id: String,
    pub times: DevTimes,
}

/// Reference data for the calculator: films, developers, and the process
/// table linking them. Not every film/developer combination is tabulated;
/// a missing pair is ordinary, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    films: Vec<FilmStock>,
    developers: Vec<Developer>,
    processes: Vec<ProcessEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            films: Vec::new(),
            developers: Vec::new(),
            processes: Vec::new(),
        }
    }

    pub fn films(&self) -> &[FilmStock] {
        &self.films
    }

    pub fn developers(&self) -> &[Developer] {
        &self.developers
    }

    pub fn processes(&self) -> &[ProcessEntry] {
        &self.processes
    }

    pub fn film(&self, id: &str) -> Option<&FilmStock> {
        self.films.iter().find(|f| f.id == id)
    }

    pub fn developer(&self, id: &str) -> Option<&Developer> {
        self.developers.iter().find(|d| d.id == id)
    }

    /// Tabulated times for a film/developer pair, or None when the
    /// combination has no published data.
    pub fn times_for(&self, film_id: &str, developer_id: &str) -> Option<&DevTimes> {
        self.processes
            .iter()
            .find(|p| p.film_id == film_id && p.developer_id == developer_id)
            .map(|p| &p.times)
    }

    pub fn add_film(&mut self, film: FilmStock) {
        self.films.push(film);
    }

    pub fn add_developer(&mut self, developer: Developer) {
        self.developers.push(developer);
    }

    pub fn add_process(&mut self, entry: ProcessEntry) {
        self.processes.push(entry);
    }

    /// Remove a film and every process row that references it.
    pub fn remove_film(&mut self, id: &str) -> Option<FilmStock> {
        let idx = self.films.iter().position(|f| f.id == id)?;
        self.processes.retain(|p| p.film_id != id);
        Some(self.films.remove(idx))
    }

    /// Remove a developer and every process row that references it.
    pub fn remove_developer(&mut self, id: &str) -> Option<Developer> {
        let idx = self.developers.iter().position(|d| d.id == id)?;
        self.processes.retain(|p| p.developer_id != id);
        Some(self.developers.remove(idx))
    }

    /// Save the catalog to a JSON file at the given path.
    pub fn save_to_file(&self, path: &str) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        info!(path, "catalog saved");
        Ok(())
    }

    /// Load a catalog from a JSON file at the given path.
    pub fn load_from_file(path: &str) -> Result<Catalog, CatalogError> {
        let mut file = File::open(path)?;
        let mut json = String::new();
        file.read_to_string(&mut json)?;
        let catalog: Catalog = serde_json::from_str(&json)?;
        info!(
            path,
            films = catalog.films.len(),
            developers = catalog.developers.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The built-in catalog: the published times this tool ships with.
    pub fn builtin() -> Self {
        fn film(id: &str, name_en: &str, name_zh: &str, brand: &str, iso: u32) -> FilmStock {
            FilmStock {
                id: id.to_string(),
                name_en: name_en.to_string(),
                name_zh: name_zh.to_string(),
                brand: brand.to_string(),
                iso,
            }
        }
        fn process(film_id: &str, developer_id: &str, standard: f64, pull: f64, push: f64) -> ProcessEntry {
            ProcessEntry {
                film_id: film_id.to_string(),
                developer_id: developer_id.to_string(),
                times: DevTimes {
                    standard_minutes: standard,
                    pull_one_minutes: pull,
                    push_one_minutes: push,
                },
            }
        }

        Catalog {
            films: vec![
                film("fp4", "Ilford FP4+", "FP4+黑白胶片", "Ilford", 125),
                film("hp5", "Ilford HP5+", "HP5+黑白胶片", "Ilford", 400),
                film("trix", "Kodak Tri-X 400", "柯达Tri-X黑白胶片", "Kodak", 400),
                film("tmax100", "Kodak T-Max 100", "柯达T-Max 100黑白胶片", "Kodak", 100),
                film("delta3200", "Ilford Delta 3200", "Delta 3200黑白胶片", "Ilford", 3200),
                film("tmax3200", "Kodak T-Max 3200", "柯达T-Max 3200黑白胶片", "Kodak", 3200),
                film("delta100", "Ilford Delta 100", "Delta 100黑白胶片", "Ilford", 100),
            ],
            developers: vec![
                Developer {
                    id: "d76".to_string(),
                    name_en: "Kodak D-76".to_string(),
                    name_zh: "柯达D-76显影液".to_string(),
                    description_en: "Classic developer with balanced contrast and grain".to_string(),
                    description_zh: "经典显影液，平衡的对比度和颗粒".to_string(),
                },
                Developer {
                    id: "ddx".to_string(),
                    name_en: "Ilfotec DD-X".to_string(),
                    name_zh: "爱尔福DD-X显影液".to_string(),
                    description_en: "Fine grain and excellent shadow detail".to_string(),
                    description_zh: "细腻颗粒和出色的暗部细节".to_string(),
                },
            ],
            processes: vec![
                process("fp4", "d76", 9.0, 8.0, 12.0),
                process("hp5", "d76", 7.5, 6.0, 9.0),
                process("hp5", "ddx", 6.0, 5.0, 7.5),
                process("trix", "d76", 7.0, 6.0, 9.0),
                process("tmax100", "d76", 9.0, 7.0, 12.0),
                process("delta3200", "d76", 15.0, 12.0, 18.0),
                process("delta3200", "ddx", 14.0, 11.0, 17.0),
                process("tmax3200", "d76", 15.0, 12.0, 18.0),
                process("delta100", "d76", 8.0, 6.0, 11.0),
            ],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
