//! Repository - in-memory collections mirrored to JSON files
//!
//! The repository owns the five collections and is the single source of
//! truth for uniqueness checks. Every mutating operation validates against
//! the current state, applies the change and then persists all collections
//! before returning. A change that cannot be persisted is undone in memory.

use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::core::entity::Entity;
use crate::core::error::{AerocodeError, Result};
use crate::core::loader;
use crate::core::session::Session;
use crate::core::workflow;
use crate::entities::{Aircraft, Employee, Part, PartStatus, PermissionLevel, Stage, Test};

/// Outcome of assigning an employee to a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Added,
    AlreadyAssigned,
}

/// All tracked records plus the directory they are persisted to
#[derive(Debug)]
pub struct Repository {
    data_dir: PathBuf,
    aircraft: Vec<Aircraft>,
    parts: Vec<Part>,
    stages: Vec<Stage>,
    employees: Vec<Employee>,
    tests: Vec<Test>,
}

impl Repository {
    /// Open the repository at `data_dir`, loading whatever is there
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let mut repo = Self {
            data_dir: data_dir.into(),
            aircraft: Vec::new(),
            parts: Vec::new(),
            stages: Vec::new(),
            employees: Vec::new(),
            tests: Vec::new(),
        };
        repo.load();
        repo
    }

    /// Reload every collection from disk; unreadable files load as empty
    pub fn load(&mut self) {
        self.aircraft = loader::load_collection(&self.path_for::<Aircraft>());
        self.parts = loader::load_collection(&self.path_for::<Part>());
        self.stages = loader::load_collection(&self.path_for::<Stage>());
        self.employees = loader::load_collection(&self.path_for::<Employee>());
        self.tests = loader::load_collection(&self.path_for::<Test>());

        info!(
            data_dir = %self.data_dir.display(),
            aircraft = self.aircraft.len(),
            parts = self.parts.len(),
            stages = self.stages.len(),
            employees = self.employees.len(),
            tests = self.tests.len(),
            "repository loaded"
        );
    }

    /// Overwrite every collection file with the in-memory state
    ///
    /// Files are written independently; a failure on one does not stop the
    /// others. The first failure is returned.
    pub fn save_all(&self) -> Result<()> {
        loader::ensure_dir(&self.data_dir)?;

        let results = [
            self.save(&self.aircraft),
            self.save(&self.parts),
            self.save(&self.stages),
            self.save(&self.employees),
            self.save(&self.tests),
        ];

        let mut first_error = None;
        for result in results {
            if let Err(err) = result {
                error!(error = %err, "failed to save collection");
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn save<T: Entity>(&self, items: &[T]) -> Result<()> {
        loader::save_collection(&self.path_for::<T>(), items)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file holding the collection of `T`
    pub fn path_for<T: Entity>(&self) -> PathBuf {
        self.data_dir.join(T::FILE_NAME)
    }

    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn find_aircraft(&self, code: &str) -> Option<&Aircraft> {
        self.aircraft.iter().find(|a| a.code == code)
    }

    pub fn require_aircraft(&self, code: &str) -> Result<&Aircraft> {
        self.find_aircraft(code)
            .ok_or_else(|| AerocodeError::not_found(Aircraft::KIND, code))
    }

    /// First part with this exact name
    pub fn find_part(&self, name: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.name == name)
    }

    pub fn require_part(&self, name: &str) -> Result<&Part> {
        self.find_part(name)
            .ok_or_else(|| AerocodeError::not_found(Part::KIND, name))
    }

    /// First stage with this exact name
    pub fn find_stage(&self, name: &str) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }

    pub fn require_stage(&self, name: &str) -> Result<&Stage> {
        self.find_stage(name)
            .ok_or_else(|| AerocodeError::not_found(Stage::KIND, name))
    }

    fn stage_index(&self, name: &str) -> Result<usize> {
        self.stages
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| AerocodeError::not_found(Stage::KIND, name))
    }

    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn require_employee(&self, id: &str) -> Result<&Employee> {
        self.find_employee(id)
            .ok_or_else(|| AerocodeError::not_found(Employee::KIND, id))
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.authenticate(username, password))
    }

    pub fn parts_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Part> + 'a {
        self.parts.iter().filter(move |p| p.belongs_to(code))
    }

    /// Stages of an aircraft in registration order
    pub fn stages_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Stage> + 'a {
        self.stages.iter().filter(move |s| s.aircraft_code == code)
    }

    pub fn tests_of<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Test> + 'a {
        self.tests.iter().filter(move |t| t.aircraft_code == code)
    }

    /// Names of the employees assigned to a stage, falling back to the ID
    /// for employees no longer on file
    pub fn assigned_names(&self, stage: &Stage) -> Vec<String> {
        stage
            .assigned_employees
            .iter()
            .map(|id| {
                self.find_employee(id)
                    .map(|e| e.name.clone())
                    .unwrap_or_else(|| id.clone())
            })
            .collect()
    }

    pub fn ensure_aircraft_code_free(&self, code: &str) -> Result<()> {
        if self.find_aircraft(code).is_some() {
            return Err(AerocodeError::duplicate(Aircraft::KIND, "código", code));
        }
        Ok(())
    }

    pub fn ensure_employee_id_free(&self, id: &str) -> Result<()> {
        if self.find_employee(id).is_some() {
            return Err(AerocodeError::duplicate(Employee::KIND, "ID", id));
        }
        Ok(())
    }

    pub fn ensure_username_free(&self, username: &str) -> Result<()> {
        if self.employees.iter().any(|e| e.username == username) {
            return Err(AerocodeError::duplicate(Employee::KIND, "usuário", username));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Persist a change already applied in memory, undoing it if the save fails
    fn commit(&mut self, undo: impl FnOnce(&mut Self)) -> Result<()> {
        if let Err(err) = self.save_all() {
            undo(self);
            return Err(err);
        }
        Ok(())
    }

    /// Register an employee; open to everyone
    pub fn register_employee(&mut self, employee: Employee) -> Result<()> {
        self.ensure_employee_id_free(&employee.id)?;
        self.ensure_username_free(&employee.username)?;

        info!(id = %employee.id, level = %employee.permission_level, "employee registered");
        self.employees.push(employee);
        self.commit(|repo| {
            repo.employees.pop();
        })
    }

    pub fn register_aircraft(&mut self, session: &Session, aircraft: Aircraft) -> Result<()> {
        session.require_level(PermissionLevel::ENGINEERING)?;
        self.ensure_aircraft_code_free(&aircraft.code)?;

        info!(code = %aircraft.code, model = %aircraft.model, "aircraft registered");
        self.aircraft.push(aircraft);
        self.commit(|repo| {
            repo.aircraft.pop();
        })
    }

    /// Register a part; an attached aircraft must exist
    pub fn register_part(&mut self, session: &Session, part: Part) -> Result<()> {
        session.require_level(PermissionLevel::ANY)?;
        if let Some(code) = &part.aircraft_code {
            self.require_aircraft(code)?;
        }

        info!(name = %part.name, aircraft = ?part.aircraft_code, "part registered");
        self.parts.push(part);
        self.commit(|repo| {
            repo.parts.pop();
        })
    }

    /// Set the status of the first part named `name`; any status may follow any other
    pub fn update_part_status(
        &mut self,
        session: &Session,
        name: &str,
        status: PartStatus,
    ) -> Result<()> {
        session.require_level(PermissionLevel::ANY)?;
        let index = self
            .parts
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| AerocodeError::not_found(Part::KIND, name))?;

        let previous = self.parts[index].status;
        info!(name, from = %previous, to = %status, "part status updated");
        self.parts[index].status = status;
        self.commit(|repo| repo.parts[index].status = previous)
    }

    pub fn register_stage(&mut self, session: &Session, stage: Stage) -> Result<()> {
        session.require_level(PermissionLevel::ENGINEERING)?;
        self.require_aircraft(&stage.aircraft_code)?;

        info!(name = %stage.name, aircraft = %stage.aircraft_code, "stage registered");
        self.stages.push(stage);
        self.commit(|repo| {
            repo.stages.pop();
        })
    }

    pub fn start_stage(&mut self, session: &Session, name: &str) -> Result<()> {
        session.require_level(PermissionLevel::ENGINEERING)?;
        let index = self.stage_index(name)?;
        let previous = self.stages[index].status;
        workflow::start(&mut self.stages, index)?;

        info!(name, "stage started");
        self.commit(|repo| repo.stages[index].status = previous)
    }

    pub fn finish_stage(&mut self, session: &Session, name: &str) -> Result<()> {
        session.require_level(PermissionLevel::ENGINEERING)?;
        let index = self.stage_index(name)?;
        let previous = self.stages[index].status;
        workflow::finish(&mut self.stages[index])?;

        info!(name, "stage finished");
        self.commit(|repo| repo.stages[index].status = previous)
    }

    /// Assign an employee to the first stage named `stage_name`; open to everyone
    pub fn assign_employee(&mut self, stage_name: &str, employee_id: &str) -> Result<Assignment> {
        let index = self.stage_index(stage_name)?;
        self.require_employee(employee_id)?;

        if !self.stages[index].assign(employee_id) {
            return Ok(Assignment::AlreadyAssigned);
        }

        info!(stage = stage_name, employee = employee_id, "employee assigned");
        self.commit(|repo| {
            repo.stages[index].assigned_employees.pop();
        })?;
        Ok(Assignment::Added)
    }

    pub fn register_test(&mut self, session: &Session, test: Test) -> Result<()> {
        session.require_level(PermissionLevel::ANY)?;
        self.require_aircraft(&test.aircraft_code)?;

        info!(
            aircraft = %test.aircraft_code,
            category = %test.category,
            result = %test.result,
            "test registered"
        );
        self.tests.push(test);
        self.commit(|repo| {
            repo.tests.pop();
        })
    }
}
