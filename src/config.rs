pub struct Config {
    pub dictionary_file: &'static str,
    pub texts_file: &'static str,
    pub outline_file: &'static str,
    // Course shards in their fixed declared order; global lesson numbers
    // follow this order.
    pub course_shards: &'static [&'static str],
    pub entries_per_page: usize,
}

impl Config {
    pub fn new() -> Self {
        Self {
            dictionary_file: "Xhosa_notes.json",
            texts_file: "Xhosa_texts.json",
            outline_file: "LessonList.csv",
            course_shards: &[
                "foundation_lessons.json",
                "part2_lessons_11_25.json",
                "part3_lessons_26_30.json",
                "part3_lessons_31_35.json",
                "part4_lessons_36_40.json",
                "part4_lessons_41_45.json",
                "part4_lessons_46_50.json",
            ],
            entries_per_page: 50,
        }
    }
}
