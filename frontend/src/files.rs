use gloo_file::File as GlooFile;
use shared::SelectedFile;
use web_sys::FileList;

/// A picked clothing photo held by an upload slot.
#[derive(Clone)]
pub struct ClothingPhoto(pub GlooFile);

impl ClothingPhoto {
    pub fn name(&self) -> String {
        self.0.name()
    }
}

impl From<web_sys::File> for ClothingPhoto {
    fn from(file: web_sys::File) -> Self {
        Self(GlooFile::from(file))
    }
}

impl AsRef<web_sys::Blob> for ClothingPhoto {
    fn as_ref(&self) -> &web_sys::Blob {
        let blob: &gloo_file::Blob = &self.0;
        blob.as_ref()
    }
}

impl SelectedFile for ClothingPhoto {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.raw_mime_type()
    }
}

/// A slot takes a single photo, so only the first entry of a list counts.
pub fn first_file(file_list: &FileList) -> Option<ClothingPhoto> {
    file_list.item(0).map(ClothingPhoto::from)
}

/// First entry that declares an image type.
pub fn first_image_file(file_list: &FileList) -> Option<ClothingPhoto> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| shared::upload::is_image_mime(&file.type_()))
        .map(ClothingPhoto::from)
}
