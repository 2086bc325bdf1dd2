#![allow(dead_code)]

/// Builds raw query datagrams field by field.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(Vec<u8>, u16, u16)>,
    question_count: Option<u16>,
    answer_count: u16,
    additional_count: u16,
    trailer: Vec<u8>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100, // RD
            questions: Vec::new(),
            question_count: None,
            answer_count: 0,
            additional_count: 0,
            trailer: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(self, name: &str) -> Self {
        self.typed_question(name, 1, 1)
    }

    pub fn typed_question(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.push((encode_labels(name), qtype, qclass));
        self
    }

    pub fn raw_question(mut self, name_bytes: &[u8], qtype: u16, qclass: u16) -> Self {
        self.questions.push((name_bytes.to_vec(), qtype, qclass));
        self
    }

    /// Overrides QDCOUNT instead of deriving it from the questions added.
    pub fn question_count(mut self, count: u16) -> Self {
        self.question_count = Some(count);
        self
    }

    pub fn answer_count(mut self, count: u16) -> Self {
        self.answer_count = count;
        self
    }

    /// Appends an EDNS0 OPT record to the additional section.
    pub fn with_opt_record(mut self) -> Self {
        self.additional_count += 1;
        self.trailer.extend_from_slice(&[
            0x00, // NAME = root
            0x00, 0x29, // TYPE = OPT
            0x10, 0x00, // CLASS = 4096 (UDP payload size)
            0x00, 0x00, 0x00, 0x00, // extended RCODE, version, flags
            0x00, 0x00, // RDLEN = 0
        ]);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let qdcount = self
            .question_count
            .unwrap_or(self.questions.len() as u16);

        let mut buf = Vec::new();
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        buf.extend_from_slice(&qdcount.to_be_bytes());
        buf.extend_from_slice(&self.answer_count.to_be_bytes());
        buf.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
        buf.extend_from_slice(&self.additional_count.to_be_bytes());

        for (name, qtype, qclass) in &self.questions {
            buf.extend_from_slice(name);
            buf.extend_from_slice(&qtype.to_be_bytes());
            buf.extend_from_slice(&qclass.to_be_bytes());
        }

        buf.extend_from_slice(&self.trailer);
        buf
    }
}

pub fn a_query(name: &str) -> Vec<u8> {
    QueryBuilder::new().question(name).build()
}

fn encode_labels(name: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    if !name.is_empty() {
        for label in name.split('.') {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0x00); // root label
    buf
}
