#[derive(Debug)]
pub struct Album {
    pub title: String,
    pub songs: Vec<Song>,
}

#[derive(Debug)]
pub struct Song {
    pub title: String,
    pub lyrics: String,
    pub url: String,
    // Assigned once by the embedding stage, None until then
    pub embedding: Option<Vec<f32>>,
}
