//! List Controller: the client's cache of server state plus modal state.
//!
//! The record list is never patched locally. Every write is followed by a
//! full reload, and the modal closes whether the write worked or not. The
//! write's own result comes back in a [`WriteOutcome`] so the caller decides
//! whether to show it.

use tracing::{error, info};

use crate::{
    api::RecordApi,
    errors::ClientError,
    form::StudentForm,
    record::Student,
};

/// Which modal is visible. Only one at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    AddOpen,
    EditOpen(Student),
    DeleteOpen(Student),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn title(&self) -> Option<&'static str> {
        match self {
            ModalState::Closed => None,
            ModalState::AddOpen => Some("Add New Student"),
            ModalState::EditOpen(_) => Some("Edit Student Details"),
            ModalState::DeleteOpen(_) => Some("Confirm Deletion"),
        }
    }

    pub fn submit_label(&self) -> Option<&'static str> {
        match self {
            ModalState::Closed => None,
            ModalState::AddOpen => Some("Create Student"),
            ModalState::EditOpen(_) => Some("Save Changes"),
            ModalState::DeleteOpen(_) => Some("Delete Student"),
        }
    }

    /// The record an edit or delete modal targets.
    pub fn selected(&self) -> Option<&Student> {
        match self {
            ModalState::EditOpen(s) | ModalState::DeleteOpen(s) => Some(s),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteAction {
    Create,
    Update,
    Delete,
}

/// Result of a submitted write and of the reload that always follows it.
#[derive(Debug)]
pub struct WriteOutcome {
    pub action: WriteAction,
    /// The record the service returned; `None` when the id was unknown.
    pub write: Result<Option<Student>, ClientError>,
    pub reload: Result<(), ClientError>,
}

impl WriteOutcome {
    pub fn succeeded(&self) -> bool {
        self.write.is_ok()
    }
}

pub struct ListController<A: RecordApi> {
    api: A,
    records: Vec<Student>,
    loading: bool,
    modal: ModalState,
    form: StudentForm,
}

impl<A: RecordApi> ListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            records: Vec::new(),
            loading: false,
            modal: ModalState::Closed,
            form: StudentForm::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn records(&self) -> &[Student] {
        &self.records
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn form(&self) -> &StudentForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StudentForm {
        &mut self.form
    }

    /// "No students found" is shown exactly when nothing is loading and the list is empty.
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.records.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Student> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Replace the whole list with the service's. On failure the old list stays.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.loading = true;
        let res = self.api.list().await;
        self.loading = false;
        match res {
            Ok(rows) => {
                info!(count = rows.len(), "student list loaded");
                self.records = rows;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Error fetching students");
                Err(e)
            }
        }
    }

    fn ensure_closed(&self) -> Result<(), ClientError> {
        if self.modal.is_open() {
            return Err(ClientError::ModalBusy);
        }
        Ok(())
    }

    pub fn open_for_create(&mut self) -> Result<(), ClientError> {
        self.ensure_closed()?;
        self.form = StudentForm::default();
        self.modal = ModalState::AddOpen;
        Ok(())
    }

    pub fn open_for_edit(&mut self, record: &Student) -> Result<(), ClientError> {
        self.ensure_closed()?;
        self.form = StudentForm::from_student(record);
        self.modal = ModalState::EditOpen(record.clone());
        Ok(())
    }

    pub fn open_for_delete(&mut self, record: &Student) -> Result<(), ClientError> {
        self.ensure_closed()?;
        self.modal = ModalState::DeleteOpen(record.clone());
        Ok(())
    }

    /// Cancel: back to Closed from any modal.
    pub fn close(&mut self) {
        self.modal = ModalState::Closed;
    }

    /// Send the add/edit form.
    ///
    /// `Err` means nothing was sent: no add/edit modal, or the form failed
    /// validation (the modal stays open). Once a request goes out the
    /// controller reloads and closes, and the write's result is in the outcome.
    pub async fn submit(&mut self) -> Result<WriteOutcome, ClientError> {
        let target = match &self.modal {
            ModalState::AddOpen => None,
            ModalState::EditOpen(s) => Some(s.id.clone()),
            _ => return Err(ClientError::NoModal("add or edit")),
        };
        let payload = self.form.validate()?;

        let (action, write) = match target {
            None => (WriteAction::Create, self.api.create(&payload).await.map(Some)),
            Some(id) => (WriteAction::Update, self.api.update(&id, &payload).await),
        };
        if let Err(e) = &write {
            error!(error = %e, ?action, "Error saving student");
        }
        Ok(self.settle(action, write).await)
    }

    /// Delete the record the delete modal was opened for.
    pub async fn confirm_delete(&mut self) -> Result<WriteOutcome, ClientError> {
        let ModalState::DeleteOpen(target) = &self.modal else {
            return Err(ClientError::NoModal("delete"));
        };
        let id = target.id.clone();
        let write = self.api.delete(&id).await;
        if let Err(e) = &write {
            error!(error = %e, %id, "Error deleting student");
        }
        Ok(self.settle(WriteAction::Delete, write).await)
    }

    async fn settle(&mut self, action: WriteAction, write: Result<Option<Student>, ClientError>) -> WriteOutcome {
        let reload = self.load().await;
        self.close();
        WriteOutcome { action, write, reload }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    };

    use async_trait::async_trait;

    use super::*;
    use crate::record::StudentPayload;

    /// In-memory stand-in for the record service.
    #[derive(Default)]
    struct FakeApi {
        rows: Mutex<Vec<Student>>,
        next_id: AtomicUsize,
        fail_writes: AtomicBool,
        fail_lists: AtomicBool,
        calls: AtomicUsize,
    }

    impl FakeApi {
        fn down() -> ClientError {
            ClientError::Store { status: 200, error: "Failed".into(), message: "store down".into() }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl RecordApi for FakeApi {
        async fn list(&self) -> Result<Vec<Student>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_lists.load(Ordering::SeqCst) {
                return Err(Self::down());
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn create(&self, p: &StudentPayload) -> Result<Student, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::down());
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
            let s = Student {
                id,
                name: Some(p.name.clone()),
                email: Some(p.email.clone()),
                course: Some(p.course.clone()),
                status: Some("Active".into()),
            };
            self.rows.lock().unwrap().push(s.clone());
            Ok(s)
        }

        async fn update(&self, id: &str, p: &StudentPayload) -> Result<Option<Student>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::down());
            }
            let mut rows = self.rows.lock().unwrap();
            Ok(rows.iter_mut().find(|s| s.id == id).map(|s| {
                s.name = Some(p.name.clone());
                s.email = Some(p.email.clone());
                s.course = Some(p.course.clone());
                s.clone()
            }))
        }

        async fn delete(&self, id: &str) -> Result<Option<Student>, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(Self::down());
            }
            let mut rows = self.rows.lock().unwrap();
            let pos = rows.iter().position(|s| s.id == id);
            Ok(pos.map(|p| rows.remove(p)))
        }
    }

    fn fill(c: &mut ListController<FakeApi>, name: &str, email: &str, course: &str) {
        let f = c.form_mut();
        f.name = name.into();
        f.email = email.into();
        f.course = course.into();
    }

    #[tokio::test]
    async fn initial_load_on_empty_service_shows_empty_state() {
        let mut c = ListController::new(FakeApi::default());
        assert!(c.is_empty_state());
        c.load().await.unwrap();
        assert!(c.records().is_empty());
        assert!(!c.loading());
        assert!(c.is_empty_state());
    }

    #[tokio::test]
    async fn add_edit_delete_scenario() {
        let mut c = ListController::new(FakeApi::default());
        c.load().await.unwrap();

        c.open_for_create().unwrap();
        assert_eq!(c.modal().title(), Some("Add New Student"));
        fill(&mut c, "Ana", "ana@x.com", "CS");
        let out = c.submit().await.unwrap();
        assert!(out.succeeded());
        assert_eq!(out.action, WriteAction::Create);
        assert_eq!(c.modal(), &ModalState::Closed);
        assert_eq!(c.records().len(), 1);
        assert_eq!(c.records()[0].status_label(), "Active");

        let ana = c.records()[0].clone();
        c.open_for_edit(&ana).unwrap();
        assert_eq!(c.form().name, "Ana");
        c.form_mut().name = "Ana B.".into();
        let out = c.submit().await.unwrap();
        assert_eq!(out.action, WriteAction::Update);
        assert_eq!(out.write.unwrap().unwrap().id, ana.id);
        assert_eq!(c.records()[0].name.as_deref(), Some("Ana B."));
        assert_eq!(c.records()[0].status_label(), "Active");

        let ana = c.records()[0].clone();
        c.open_for_delete(&ana).unwrap();
        let out = c.confirm_delete().await.unwrap();
        assert_eq!(out.action, WriteAction::Delete);
        assert!(out.succeeded());
        assert!(c.records().is_empty());
        assert!(c.is_empty_state());
        assert_eq!(c.modal(), &ModalState::Closed);
    }

    #[tokio::test]
    async fn failed_write_still_reloads_and_closes() {
        let api = FakeApi::default();
        api.fail_writes.store(true, Ordering::SeqCst);
        let mut c = ListController::new(api);

        c.open_for_create().unwrap();
        fill(&mut c, "Ana", "ana@x.com", "CS");
        let out = c.submit().await.unwrap();
        assert!(!out.succeeded());
        assert!(out.reload.is_ok());
        assert_eq!(c.modal(), &ModalState::Closed);
        assert!(c.records().is_empty());
        // one write plus one reload
        assert_eq!(c.api().calls(), 2);
    }

    #[tokio::test]
    async fn failed_delete_still_closes() {
        let mut c = ListController::new(FakeApi::default());
        c.open_for_create().unwrap();
        fill(&mut c, "Ana", "ana@x.com", "CS");
        c.submit().await.unwrap();

        c.api().fail_writes.store(true, Ordering::SeqCst);
        let ana = c.records()[0].clone();
        c.open_for_delete(&ana).unwrap();
        let out = c.confirm_delete().await.unwrap();
        assert!(out.write.is_err());
        assert_eq!(c.modal(), &ModalState::Closed);
        assert_eq!(c.records(), &[ana]);
    }

    #[tokio::test]
    async fn failed_load_keeps_stale_list() {
        let mut c = ListController::new(FakeApi::default());
        c.open_for_create().unwrap();
        fill(&mut c, "Ana", "ana@x.com", "CS");
        c.submit().await.unwrap();
        assert_eq!(c.records().len(), 1);

        c.api().rows.lock().unwrap().clear();
        c.api().fail_lists.store(true, Ordering::SeqCst);
        assert!(c.load().await.is_err());
        assert_eq!(c.records().len(), 1);
        assert!(!c.loading());
    }

    #[tokio::test]
    async fn editing_a_vanished_record_yields_none() {
        let mut c = ListController::new(FakeApi::default());
        c.open_for_create().unwrap();
        fill(&mut c, "Ana", "ana@x.com", "CS");
        c.submit().await.unwrap();
        let ana = c.records()[0].clone();

        c.api().rows.lock().unwrap().clear();
        c.open_for_edit(&ana).unwrap();
        let out = c.submit().await.unwrap();
        assert!(matches!(out.write, Ok(None)));
        assert!(c.records().is_empty());
        assert_eq!(c.modal(), &ModalState::Closed);
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing_and_stays_open() {
        let mut c = ListController::new(FakeApi::default());
        c.open_for_create().unwrap();
        fill(&mut c, "Ana", "not-an-email", "CS");
        let err = c.submit().await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidForm(_)));
        assert_eq!(c.modal(), &ModalState::AddOpen);
        assert_eq!(c.api().calls(), 0);
    }

    #[tokio::test]
    async fn wrong_modal_is_rejected_without_requests() {
        let mut c = ListController::new(FakeApi::default());
        assert!(matches!(c.submit().await, Err(ClientError::NoModal(_))));
        assert!(matches!(c.confirm_delete().await, Err(ClientError::NoModal(_))));
        c.open_for_create().unwrap();
        assert!(matches!(c.confirm_delete().await, Err(ClientError::NoModal(_))));
        assert_eq!(c.api().calls(), 0);
    }

    #[test]
    fn modals_do_not_stack_and_cancel_closes() {
        let mut c = ListController::new(FakeApi::default());
        let s = Student { id: "1".into(), name: None, email: None, course: None, status: None };
        c.open_for_delete(&s).unwrap();
        assert_eq!(c.modal().selected(), Some(&s));
        assert!(matches!(c.open_for_create(), Err(ClientError::ModalBusy)));
        assert!(matches!(c.open_for_edit(&s), Err(ClientError::ModalBusy)));
        c.close();
        assert_eq!(c.modal(), &ModalState::Closed);
        c.open_for_create().unwrap();
        assert_eq!(c.modal().submit_label(), Some("Create Student"));
    }

    #[test]
    fn open_for_create_clears_previous_form() {
        let mut c = ListController::new(FakeApi::default());
        let s = Student {
            id: "1".into(),
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
            course: Some("CS".into()),
            status: None,
        };
        c.open_for_edit(&s).unwrap();
        assert_eq!(c.form().email, "ana@x.com");
        c.close();
        c.open_for_create().unwrap();
        assert_eq!(c.form(), &StudentForm::default());
    }
}
