use chrono::NaiveDate;
use graphlens_core::reflect_struct;
use uuid::Uuid;

#[allow(dead_code)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: Option<String>,
}
reflect_struct!(Address {
    street,
    city,
    postal_code
});

#[allow(dead_code)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub tags: Vec<String>,
    pub address: Option<Address>,
    pub born: Option<NaiveDate>,
}
reflect_struct!(Person {
    #[readonly] id,
    name,
    age,
    tags,
    address,
    born
});

/// Same member names as the first two `Person` members, different type
#[allow(dead_code)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Named {
    pub name: String,
    pub tags: Vec<String>,
}
reflect_struct!(Named { name, tags });

#[allow(dead_code)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NamedWithExtra {
    pub name: String,
    pub tags: Vec<String>,
    pub extra: i32,
}
reflect_struct!(NamedWithExtra { name, tags, extra });

/// `age` declared as text, so never a copy target for `Person::age`
#[allow(dead_code)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AgeAsText {
    pub name: String,
    pub age: String,
}
reflect_struct!(AgeAsText { name, age });

#[allow(dead_code)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Team {
    pub title: String,
    pub members: Vec<Person>,
    pub lead: Option<Box<Person>>,
}
reflect_struct!(Team {
    title,
    members,
    lead
});

/// Create a test address
#[allow(dead_code)]
pub fn sample_address() -> Address {
    Address {
        street: "1 Main Road".to_string(),
        city: "Springfield".to_string(),
        postal_code: Some("1234".to_string()),
    }
}

/// Create a fully populated test person
#[allow(dead_code)]
pub fn sample_person(name: &str) -> Person {
    Person {
        id: Uuid::now_v7(),
        name: name.to_string(),
        age: 42,
        tags: vec!["a".to_string(), "b".to_string()],
        address: Some(sample_address()),
        born: NaiveDate::from_ymd_opt(1982, 3, 14),
    }
}

#[allow(dead_code)]
pub fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
