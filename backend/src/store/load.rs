//! Startup-time CSV reading. Each data file carries a header row whose
//! columns map one-to-one onto the record struct fields; ids are parsed
//! into integers here so everything downstream compares numerically.

use super::StoreError;
use common::model::user::{Address, Company, Geo, User};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Reads every row of a headered CSV file into `T`, preserving file order.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// One line of `users.csv`. The file is flat at rest; the nested
/// address/company shape of [`User`] is assembled after parsing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRow {
    id: u32,
    name: String,
    username: String,
    email: String,
    street: String,
    suite: String,
    city: String,
    zipcode: String,
    lat: String,
    lng: String,
    phone: String,
    website: String,
    company_name: String,
    catch_phrase: String,
    bs: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            username: row.username,
            email: row.email,
            address: Address {
                street: row.street,
                suite: row.suite,
                city: row.city,
                zipcode: row.zipcode,
                geo: Geo {
                    lat: row.lat,
                    lng: row.lng,
                },
            },
            phone: row.phone,
            website: row.website,
            company: Company {
                name: row.company_name,
                catch_phrase: row.catch_phrase,
                bs: row.bs,
            },
        }
    }
}

pub fn load_users(path: &Path) -> Result<Vec<User>, StoreError> {
    Ok(read_csv::<UserRow>(path)?
        .into_iter()
        .map(User::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::album::Album;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn user_rows_become_nested_users() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.csv");
        fs::write(
            &path,
            "id,name,username,email,street,suite,city,zipcode,lat,lng,phone,website,companyName,catchPhrase,bs\n\
             1,Leanne Graham,Bret,Sincere@april.biz,Kulas Light,Apt. 556,Gwenborough,92998-3874,-37.3159,81.1496,1-770-736-8031,hildegard.org,Romaguera-Crona,Multi-layered client-server neural-net,harness real-time e-markets\n",
        )
        .unwrap();

        let users = load_users(&path).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].address.city, "Gwenborough");
        assert_eq!(users[0].address.geo.lat, "-37.3159");
        assert_eq!(users[0].company.catch_phrase, "Multi-layered client-server neural-net");
    }

    #[test]
    fn album_rows_parse_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("albums.csv");
        fs::write(&path, "userId,id,title\n1,2,second\n1,1,first\n").unwrap();

        let albums: Vec<Album> = read_csv(&path).unwrap();
        assert_eq!(albums.len(), 2);
        // File order is collection order; nothing gets sorted.
        assert_eq!(albums[0].id, 2);
        assert_eq!(albums[1].id, 1);
    }

    #[test]
    fn non_numeric_id_is_a_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("albums.csv");
        fs::write(&path, "userId,id,title\n1,007x,bad\n").unwrap();

        assert!(read_csv::<Album>(&path).is_err());
    }
}
