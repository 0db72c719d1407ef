use crate::{
    config::Config,
    dnd::{apply_intent, KeyCommand, KeyboardSensor, PointerEvent, PointerSensor, ReorderSource},
    domain::{EntryKey, EntryKeyAllocator, ImageEntry, ListStore},
    error::Result,
    transfer::{check_extension, export_contents, export_file_name, parse_url_list, Downloader, TextFile},
};
use chrono::{NaiveDate, Utc};

/// Image URL sorter: import a list, reorder it by dragging, export it again.
///
/// The list lives only as long as this value.
pub struct ImageSorter {
    config: Config,
    list: ListStore<ImageEntry>,
    keys: EntryKeyAllocator,
    file_name: Option<String>,
    pointer: PointerSensor<EntryKey>,
    keyboard: KeyboardSensor<EntryKey>,
}

impl ImageSorter {
    pub fn new(config: Config) -> Self {
        let pointer = PointerSensor::from_config(&config);
        Self {
            config,
            list: ListStore::new(),
            keys: EntryKeyAllocator::new(),
            file_name: None,
            pointer,
            keyboard: KeyboardSensor::new(),
        }
    }

    pub fn entries(&self) -> &[ImageEntry] {
        self.list.items()
    }

    pub fn urls(&self) -> Vec<&str> {
        self.list.iter().map(|entry| entry.url.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Name of the most recently imported file
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn pointer(&self) -> &PointerSensor<EntryKey> {
        &self.pointer
    }

    pub fn keyboard(&self) -> &KeyboardSensor<EntryKey> {
        &self.keyboard
    }

    /// Replaces the list with the URLs in `file`, returning how many were loaded.
    ///
    /// The list and file name are left untouched if the file has the wrong
    /// extension or cannot be read.
    pub async fn import<F: TextFile + ?Sized>(&mut self, file: &F) -> Result<usize> {
        let name = file.name().to_string();
        check_extension(&name, &self.config.import_extension)?;

        let text = file.read_text().await?;
        let entries = self.keys.entries(parse_url_list(&text));
        let count = entries.len();

        self.reset_gestures();
        self.list.replace_all(entries);
        tracing::info!(file = %name, count, "imported image list");
        self.file_name = Some(name);
        Ok(count)
    }

    /// Empties the list and forgets the imported file
    pub fn clear(&mut self) {
        self.reset_gestures();
        self.list.clear();
        self.file_name = None;
        tracing::debug!("cleared image list");
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        self.list.move_item(from, to)
    }

    /// Feeds a pointer event; returns `true` if it completed a reorder
    pub fn handle_pointer(&mut self, event: PointerEvent<EntryKey>) -> bool {
        match self.pointer.handle(event) {
            Some(intent) => apply_intent(&mut self.list, &intent),
            None => false,
        }
    }

    /// Feeds a keyboard command; returns `true` if it moved an item
    pub fn handle_key(&mut self, command: KeyCommand<EntryKey>) -> bool {
        match self.keyboard.handle(command) {
            Some(intent) => apply_intent(&mut self.list, &intent),
            None => false,
        }
    }

    pub fn export_contents(&self) -> String {
        export_contents(self.list.iter().map(|entry| entry.url.as_str()))
    }

    pub fn export_file_name(&self, date: NaiveDate) -> String {
        export_file_name(&self.config.export_prefix, date)
    }

    /// Hands the current order to `downloader`, returning the file name used
    pub async fn export<D: Downloader + ?Sized>(
        &self,
        downloader: &D,
        date: NaiveDate,
    ) -> Result<String> {
        let file_name = self.export_file_name(date);
        downloader
            .download(&file_name, &self.export_contents())
            .await?;
        Ok(file_name)
    }

    /// Same as [`ImageSorter::export`], dated with today's UTC date
    pub async fn export_today<D: Downloader + ?Sized>(&self, downloader: &D) -> Result<String> {
        self.export(downloader, Utc::now().date_naive()).await
    }

    fn reset_gestures(&mut self) {
        self.pointer.reset();
        self.keyboard.reset();
    }
}

impl Default for ImageSorter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
