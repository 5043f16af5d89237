use super::*;

impl<'a> PlaceRepo for DbReadOnly<'a> {
    fn create_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }
    fn update_place(&self, _place: &Place) -> Result<()> {
        unreachable!();
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_place_by_slug(&self, slug: &str) -> Result<Option<Place>> {
        try_get_place_by_slug(&mut self.conn.borrow_mut(), slug)
    }

    fn places_with_status(&self, status: PlaceStatus) -> Result<Vec<Place>> {
        places_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn places_created_by(&self, profile_id: &str) -> Result<Vec<Place>> {
        places_created_by(&mut self.conn.borrow_mut(), profile_id)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }

    fn approve_place_if_submitted(&self, _id: &str, _at: Timestamp) -> Result<usize> {
        unreachable!();
    }
}

impl<'a> PlaceRepo for DbReadWrite<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_place_by_slug(&self, slug: &str) -> Result<Option<Place>> {
        try_get_place_by_slug(&mut self.conn.borrow_mut(), slug)
    }

    fn places_with_status(&self, status: PlaceStatus) -> Result<Vec<Place>> {
        places_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn places_created_by(&self, profile_id: &str) -> Result<Vec<Place>> {
        places_created_by(&mut self.conn.borrow_mut(), profile_id)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }

    fn approve_place_if_submitted(&self, id: &str, at: Timestamp) -> Result<usize> {
        approve_place_if_submitted(&mut self.conn.borrow_mut(), id, at)
    }
}

impl<'a> PlaceRepo for DbConnection<'a> {
    fn create_place(&self, place: &Place) -> Result<()> {
        create_place(&mut self.conn.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> Result<()> {
        update_place(&mut self.conn.borrow_mut(), place)
    }

    fn get_place(&self, id: &str) -> Result<Place> {
        get_place(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_place_by_slug(&self, slug: &str) -> Result<Option<Place>> {
        try_get_place_by_slug(&mut self.conn.borrow_mut(), slug)
    }

    fn places_with_status(&self, status: PlaceStatus) -> Result<Vec<Place>> {
        places_with_status(&mut self.conn.borrow_mut(), status)
    }
    fn places_created_by(&self, profile_id: &str) -> Result<Vec<Place>> {
        places_created_by(&mut self.conn.borrow_mut(), profile_id)
    }
    fn count_places(&self) -> Result<usize> {
        count_places(&mut self.conn.borrow_mut())
    }

    fn approve_place_if_submitted(&self, id: &str, at: Timestamp) -> Result<usize> {
        approve_place_if_submitted(&mut self.conn.borrow_mut(), id, at)
    }
}

fn create_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    let new_place = models::NewPlace::from(place);
    diesel::insert_into(schema::place::table)
        .values(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    use schema::place::dsl;
    let new_place = models::NewPlace::from(place);
    let count = diesel::update(dsl::place.filter(dsl::id.eq(&new_place.id)))
        .set(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<Place> {
    use schema::place::dsl;
    dsl::place
        .filter(dsl::id.eq(id))
        .first::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn try_get_place_by_slug(conn: &mut SqliteConnection, slug: &str) -> Result<Option<Place>> {
    use schema::place::dsl;
    dsl::place
        .filter(dsl::slug.eq(slug))
        .first::<models::PlaceEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(TryInto::try_into)
        .transpose()
}

fn places_with_status(conn: &mut SqliteConnection, status: PlaceStatus) -> Result<Vec<Place>> {
    use schema::place::dsl;
    dsl::place
        .filter(dsl::status.eq(PlaceStatusPrimitive::from(status)))
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn places_created_by(conn: &mut SqliteConnection, profile_id: &str) -> Result<Vec<Place>> {
    use schema::place::dsl;
    dsl::place
        .filter(dsl::created_by.eq(profile_id))
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(TryInto::try_into)
        .collect()
}

fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::place::dsl;
    Ok(dsl::place
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn approve_place_if_submitted(conn: &mut SqliteConnection, id: &str, at: Timestamp) -> Result<usize> {
    use schema::place::dsl;
    let submitted = PlaceStatusPrimitive::from(PlaceStatus::Submitted);
    let approved = PlaceStatusPrimitive::from(PlaceStatus::Approved);
    let count = diesel::update(
        dsl::place
            .filter(dsl::id.eq(id))
            .filter(dsl::status.eq(submitted)),
    )
    .set((
        dsl::status.eq(approved),
        dsl::approved_at.eq(Some(at.into_seconds())),
        dsl::updated_at.eq(at.into_seconds()),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    Ok(count)
}
