use super::*;

impl<'a> ProfileRepo for DbReadOnly<'a> {
    fn create_profile(&self, _profile: &Profile) -> Result<()> {
        unreachable!();
    }
    fn update_profile(&self, _profile: &Profile) -> Result<()> {
        unreachable!();
    }

    fn get_profile(&self, id: &str) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile(&self, id: &str) -> Result<Option<Profile>> {
        try_get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>> {
        try_get_profile_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_profiles(&self) -> Result<Vec<Profile>> {
        all_profiles(&mut self.conn.borrow_mut())
    }
    fn count_profiles(&self) -> Result<usize> {
        count_profiles(&mut self.conn.borrow_mut())
    }
}

impl<'a> ProfileRepo for DbReadWrite<'a> {
    fn create_profile(&self, profile: &Profile) -> Result<()> {
        create_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &Profile) -> Result<()> {
        update_profile(&mut self.conn.borrow_mut(), profile)
    }

    fn get_profile(&self, id: &str) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile(&self, id: &str) -> Result<Option<Profile>> {
        try_get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>> {
        try_get_profile_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_profiles(&self) -> Result<Vec<Profile>> {
        all_profiles(&mut self.conn.borrow_mut())
    }
    fn count_profiles(&self) -> Result<usize> {
        count_profiles(&mut self.conn.borrow_mut())
    }
}

impl<'a> ProfileRepo for DbConnection<'a> {
    fn create_profile(&self, profile: &Profile) -> Result<()> {
        create_profile(&mut self.conn.borrow_mut(), profile)
    }
    fn update_profile(&self, profile: &Profile) -> Result<()> {
        update_profile(&mut self.conn.borrow_mut(), profile)
    }

    fn get_profile(&self, id: &str) -> Result<Profile> {
        get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile(&self, id: &str) -> Result<Option<Profile>> {
        try_get_profile(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_profile_by_email(&self, email: &EmailAddress) -> Result<Option<Profile>> {
        try_get_profile_by_email(&mut self.conn.borrow_mut(), email)
    }

    fn all_profiles(&self) -> Result<Vec<Profile>> {
        all_profiles(&mut self.conn.borrow_mut())
    }
    fn count_profiles(&self) -> Result<usize> {
        count_profiles(&mut self.conn.borrow_mut())
    }
}

fn create_profile(conn: &mut SqliteConnection, profile: &Profile) -> Result<()> {
    let new_profile = models::NewProfile::from(profile);
    diesel::insert_into(schema::profile::table)
        .values(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_profile(conn: &mut SqliteConnection, profile: &Profile) -> Result<()> {
    use schema::profile::dsl;
    let new_profile = models::NewProfile::from(profile);
    let count = diesel::update(dsl::profile.filter(dsl::id.eq(&new_profile.id)))
        .set(&new_profile)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_profile(conn: &mut SqliteConnection, id: &str) -> Result<Profile> {
    use schema::profile::dsl;
    dsl::profile
        .filter(dsl::id.eq(id))
        .first::<models::ProfileEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn try_get_profile(conn: &mut SqliteConnection, id: &str) -> Result<Option<Profile>> {
    use schema::profile::dsl;
    dsl::profile
        .filter(dsl::id.eq(id))
        .first::<models::ProfileEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn try_get_profile_by_email(
    conn: &mut SqliteConnection,
    email: &EmailAddress,
) -> Result<Option<Profile>> {
    use schema::profile::dsl;
    dsl::profile
        .filter(dsl::email.eq(email.as_str()))
        .first::<models::ProfileEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn all_profiles(conn: &mut SqliteConnection) -> Result<Vec<Profile>> {
    use schema::profile::dsl;
    dsl::profile
        .load::<models::ProfileEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn count_profiles(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::profile::dsl;
    Ok(dsl::profile
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
