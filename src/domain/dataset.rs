// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 内置教师名录数据
//!
//! 两个院系的记录在编译期固定。数据集版本为其规范 JSON 序列化的 SHA-256，
//! 启动时据此判断持久化的名录是否需要重新装载。

use once_cell::sync::Lazy;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::domain::models::faculty::{parse_yes_no, Department, FacultyRecord};

/// 序号, 姓名, 学位, 学校, 取得学位年份, 职称, 入职日期, 专业方向,
/// 论文数, 博士指导, 本期获博士学位人数, 是否在职, 离职日期
type Row = (
    i32,
    &'static str,
    &'static str,
    &'static str,
    i32,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
);

// S.No 18 was never assigned in the CSE register.
const CSE_ROWS: &[Row] = &[
    (1, "Dr. Preetha M", "Ph.D.", "Anna University", 2017, "Professor", "01-07-2021", "Wireless sensor networks", "20", "-", "-", "Yes", "N/A"),
    (2, "Dr. Ravikumar V", "Ph.D.", "Bharath University", 2011, "Professor", "08-05-2023", "Machine learning, Artificial Intelligence", "4", "-", "-", "Yes", "N/A"),
    (3, "Dr. Hariharasudhan S", "Ph.D.", "Bharath University", 2020, "Associate Professor", "12-06-2023", "Networks, Internet of things", "0", "-", "-", "Yes", "N/A"),
    (4, "Dr. Senthil K", "Ph.D.", "Anna University", 2019, "Assistant Professor", "08-12-2021", "Cloud Computing", "4", "-", "-", "No", "06-05-2023"),
    (5, "Dr. Veeralakshmi P", "Ph.D.", "B.S. Abdur Rahman University", 2018, "Associate Professor", "04-06-2007", "Network Security", "0", "-", "-", "No", "01-12-2021"),
    (6, "Ms.Umamaheswari B", "M. Tech.", "SRM University", 2013, "Assistant professor", "19-12-2018", "Artificial Intelligence", "12", "-", "-", "Yes", "N/A"),
    (7, "Ms. Bhuvaneswari S", "M.E.", "Anna University", 2015, "Assistant Professor", "20-05-2020", "Artificial Intelligence and Big Data", "3", "-", "-", "Yes", "N/A"),
    (8, "Ms. Arunadevi R", "M.E.", "Anna University", 2014, "Assistant Professor", "08-07-2022", "Machine learning, Wireless networks", "4", "-", "-", "Yes", "N/A"),
    (9, "Ms. Sathya S", "M.E.", "Anna University", 2016, "Assistant Professor", "06-07-2022", "Machine learning, Artificial intelligence", "2", "-", "-", "Yes", "N/A"),
    (10, "Ms. Keerthiga A", "M.E.", "Anna University", 2021, "Assistant Professor", "01-06-2023", "Compiler networks, Cloud computing", "1", "-", "-", "Yes", "N/A"),
    (11, "Ms. Sindhu M", "M.E.", "Anna University", 2013, "Assistant Professor", "05-06-2023", "Cyber security, block chain technology", "2", "-", "-", "Yes", "N/A"),
    (12, "Ms. Rajalakshmi G", "M. Tech.", "Vel Tech Technical University", 2012, "Assistant Professor", "19-06-2023", "Bio informatics, AR/VR", "0", "-", "-", "Yes", "N/A"),
    (13, "Ms. Sowmiya S", "M.E.", "Anna University", 2023, "Assistant Professor", "11-10-2023", "Wireless networks, AR/VR", "1", "-", "-", "Yes", "N/A"),
    (14, "Ms. Senthurya S", "M.E.", "Anna University", 2023, "Assistant Professor", "13-10-2023", "Wireless networks, image processing", "1", "-", "-", "Yes", "N/A"),
    (15, "Ms. Reena R", "M.E", "Anna University", 2008, "Assistant Professor", "18-08-2007", "Cloud Computing, Big Data Analytics", "16", "-", "-", "Yes", "Transferred to IT 31.07.23"),
    (16, "Ms. Sathya T", "M.E", "SRM University", 2013, "Assistant Professor", "06-01-2017", "Data Base Management System", "4", "-", "-", "No", "26-07-2023"),
    (17, "Ms. Jermin Jersha T C", "M.E.", "St Peters University", 2011, "Assistant Professor", "06-02-2020", "Artificial Intelligence, Network security", "0", "-", "-", "No", "06-06-2023"),
    (19, "Ms. Sowmya B", "M.E.", "Anna University", 2017, "Assistant Professor", "04-12-2017", "Data Mining", "1", "-", "-", "Yes", "N/A"),
    (20, "Ms Aparna R", "M. Tech", "BSAREC", 2013, "Assistant Professor", "04-06-2018", "Machine learning", "0", "-", "-", "No", "13-05-2022"),
    (21, "Mr .Senthil Kumar S R", "M.E", "Annamalai University", 2013, "Assistant Professor", "11-09-2013", "Image Processing", "0", "-", "-", "No", "10-05-2022"),
];

const IT_ROWS: &[Row] = &[
    (1, "Dr D. Venkata Subramaniam", "PDF", "B.S. Abdur Rahman Institute Of Science And Technology", 2014, "Professor", "15.05.2023", "Deep Learning", "1", "N/A", "N/A", "Yes", "N/A"),
    (2, "Dr P. Balakumar", "Ph.D.", "Bharath University", 2011, "Professor", "03.05.2023", "Augmented Reality/Virtual Reality", "22", "N/A", "N/A", "Yes", "N/A"),
    (3, "Dr P. Indira Priya", "Ph.D.", "Anna University", 2014, "Professor", "01.02.2022", "Deep Learning", "18", "N/A", "N/A", "No", "01.05.2023"),
    (4, "Dr S. Anbu", "Ph.D.", "Bharath University", 2011, "Professor", "08.07.2019", "Data Structure", "-", "-", "-", "No", "04-05-2022"),
    (5, "Dr G.Ayyappan", "Ph.D.", "Bharath University", 2018, "Associate Professor", "08.02.2021", "Robotics", "4", "-", "-", "No", "12.02.2023"),
    (6, "MS R.Kalpana", "M.E.", "Sathyabama University", 2012, "Assistant Professor", "05.07.2007", "Cloud computing Big data analytics", "31", "-", "-", "No", "31-07-2023"),
    (7, "MS J. Jayashankari", "M.E.", "Annamalai University", 2013, "Assistant professor", "07.05.2009", "Artificial intelligence", "19", "-", "-", "Yes", "N/A"),
    (8, "MS M.R .Rajeswari", "M.E.", "Anna University", 2012, "Assistant professor", "04.04.2012", "Big data analytics", "3", "-", "-", "No", "11-05-2022"),
    (9, "MS D.Deepa", "M.E.", "Anna University", 2014, "Assistant professor", "09.01.2014", "Cyber Security", "-", "-", "-", "No", "18-05-2022"),
    (10, "MS A.Shantha kumari", "M.E.", "Anna University", 2012, "Assistant professor", "19.12.2018", "Data mining", "7", "-", "-", "Yes", "N/A"),
    (11, "MS M. Sumana", "M.E.", "Anna University", 2012, "Assistant professor", "05.06.2019", "Data science", "-", "-", "-", "No", "20-05-2022"),
    (12, "MS M. Sirija", "M.E.", "Anna University", 2019, "Assistant professor", "23.12.2019", "Big data Analytics", "-", "-", "-", "No", "31-10-2023"),
    (13, "MS B. Latha", "M. Tech.", "MGR University", 2007, "Assistant professor", "01.03.2021", "Cryptography and network security", "2", "-", "-", "Yes", "N/A"),
    (14, "MS S K. Velumathy Kalaivani", "M. Tech.", "SRM University", 2012, "Assistant professor", "09.05.2022", "Artificial Intelligence", "-", "-", "-", "No", "27-05-2023"),
    (15, "MS M. Divya bharathi", "M.E.", "Anna University", 2019, "Assistant professor", "02.06.2022", "Software Testing", "-", "-", "-", "No", "17-08-2023"),
    (16, "MS T. Vanaja", "M.E.", "Anna University", 2015, "Assistant professor", "16.08.2022", "Cloud computing", "-", "-", "-", "Yes", "N/A"),
    (17, "MS P. Allirani", "M.E.", "Anna University", 2010, "Assistant professor", "17.08.2022", "Cryptography and network security", "-", "-", "-", "Yes", "N/A"),
    (18, "MS R. Nishanthi", "M.E.", "Anna University", 2012, "Assistant professor", "01.12.2022", "Cyber Security", "-", "-", "-", "Yes", "N/A"),
    (19, "MS R. Reena", "M.E", "Anna University", 2008, "Assistant professor", "01.06.2023", "Cloud Computing and Big Data Analytics", "4", "-", "-", "Yes", "N/A"),
    (20, "MS S. Ganga", "M.E.", "Sathyabama University", 2012, "Assistant professor", "12.06.2023", "Artificial Intelligence and Machine learning", "5", "-", "-", "Yes", "N/A"),
    (21, "MS K. Revathi", "M.E.", "Anna University", 2014, "Assistant professor", "26-06-2023", "Cryptography and network security", "-", "-", "-", "Yes", "N/A"),
    (22, "MR T. Vignesh", "M.E.", "Anna University", 2016, "Assistant professor", "09.06.2023", "Networks", "-", "-", "-", "Yes", "N/A"),
];

const CSE_DESIGNATED_ON: &str = "N/A";
const ASSOCIATION_NATURE: &str = "Regular";

/// 一份完整的名录数据，按院系分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacultyDataset {
    cse: Vec<FacultyRecord>,
    it: Vec<FacultyRecord>,
}

impl FacultyDataset {
    pub fn new(cse: Vec<FacultyRecord>, it: Vec<FacultyRecord>) -> Self {
        Self { cse, it }
    }

    pub fn records(&self, department: Department) -> &[FacultyRecord] {
        match department {
            Department::Cse => &self.cse,
            Department::It => &self.it,
        }
    }

    pub fn total_records(&self) -> usize {
        self.cse.len() + self.it.len()
    }

    /// 数据集版本：规范 JSON 序列化后的 SHA-256（小写十六进制）
    pub fn version(&self) -> Result<String, serde_json::Error> {
        let canonical = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&canonical)))
    }
}

static BUILTIN: Lazy<FacultyDataset> = Lazy::new(|| {
    FacultyDataset::new(
        CSE_ROWS
            .iter()
            .map(|row| to_record(Department::Cse, row))
            .collect(),
        IT_ROWS
            .iter()
            .map(|row| to_record(Department::It, row))
            .collect(),
    )
});

/// 内置的名录数据
pub fn builtin() -> &'static FacultyDataset {
    &BUILTIN
}

fn to_record(department: Department, row: &Row) -> FacultyRecord {
    let (
        sequence_number,
        name,
        degree,
        university,
        year_of_qualification,
        designation,
        date_of_joining,
        specialization,
        publication_count,
        phd_guidance,
        phd_graduates,
        currently_associated,
        date_of_leaving,
    ) = *row;

    FacultyRecord {
        sequence_number,
        name: name.to_string(),
        degree: degree.to_string(),
        university: university.to_string(),
        year_of_qualification,
        designation: designation.to_string(),
        designated_on: match department {
            Department::Cse => Some(CSE_DESIGNATED_ON.to_string()),
            Department::It => None,
        },
        date_of_joining: date_of_joining.to_string(),
        department,
        specialization: specialization.to_string(),
        publication_count: publication_count.to_string(),
        phd_guidance: phd_guidance.to_string(),
        phd_graduates: phd_graduates.to_string(),
        currently_associated: parse_yes_no(currently_associated),
        date_of_leaving: date_of_leaving.to_string(),
        association_nature: ASSOCIATION_NATURE.to_string(),
    }
}
