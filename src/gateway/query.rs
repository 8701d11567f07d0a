/// Sort fields accepted by the gateway's list endpoint.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortField {
    #[default]
    Name,
    Population,
    Area,
    PopulationDensity,
    Region,
}

impl SortField {
    /// Wire name as the gateway expects it.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Population => "population",
            SortField::Area => "area",
            SortField::PopulationDensity => "population_density",
            SortField::Region => "region",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Population => "Population",
            SortField::Area => "Area",
            SortField::PopulationDensity => "Density",
            SortField::Region => "Region",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortField::Name => SortField::Population,
            SortField::Population => SortField::Area,
            SortField::Area => SortField::PopulationDensity,
            SortField::PopulationDensity => SortField::Region,
            SortField::Region => SortField::Name,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// Page sizes the gateway supports; cycling past the last returns to unset.
pub const LIMIT_STEPS: [u32; 5] = [50, 100, 150, 200, 250];

/// Parameters of a list request. Owned exclusively by the listing view;
/// any change invalidates the current summary sequence.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ListQuery {
    pub sort_by: SortField,
    pub order_by: SortOrder,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Query pairs for the wire. An unset limit is omitted entirely so the
    /// gateway's own default applies.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs.push(("sortBy", self.sort_by.as_str().to_string()));
        pairs.push(("orderBy", self.order_by.as_str().to_string()));
        pairs
    }

    /// Advance the limit to the next supported page size, wrapping back to
    /// unset after the largest.
    pub fn cycle_limit(&mut self) {
        self.limit = match self.limit {
            None => Some(LIMIT_STEPS[0]),
            Some(current) => LIMIT_STEPS
                .iter()
                .position(|step| *step == current)
                .and_then(|idx| LIMIT_STEPS.get(idx + 1))
                .copied(),
        };
    }
}
