use crate::assessment::catalog;
use crate::assessment::domain::{Archetype, Dimension, DimensionPercentiles, FacetPercentiles};

/// Dominant and secondary dimensions, archetype and weakest facet of a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchetypeResolution {
    pub archetype: &'static Archetype,
    pub dominant_dimension: Dimension,
    pub secondary_dimension: Dimension,
    pub shadow_trait: String,
}

/// Resolves the profile shape from percentiles.
///
/// Dimensions are scanned in canonical order and the first strict maximum
/// wins, so ties go to the earlier dimension. The shadow trait is the first
/// strict minimum in facet-table order; it is empty when no catalog facet has
/// a percentile.
pub fn resolve_archetype(
    dimension_percentiles: &DimensionPercentiles,
    facet_percentiles: &FacetPercentiles,
) -> ArchetypeResolution {
    let dominant_dimension =
        strongest_dimension(dimension_percentiles, None).unwrap_or(Dimension::Openness);
    let secondary_dimension = strongest_dimension(dimension_percentiles, Some(dominant_dimension))
        .unwrap_or_else(|| first_other_than(dominant_dimension));

    let shadow_trait = weakest_facet(facet_percentiles)
        .map(str::to_string)
        .unwrap_or_default();

    let archetype =
        catalog::archetype_for(dominant_dimension).unwrap_or_else(catalog::default_archetype);

    ArchetypeResolution {
        archetype,
        dominant_dimension,
        secondary_dimension,
        shadow_trait,
    }
}

fn strongest_dimension(
    percentiles: &DimensionPercentiles,
    excluded: Option<Dimension>,
) -> Option<Dimension> {
    let mut best: Option<(Dimension, i32)> = None;

    for dimension in Dimension::ordered() {
        if Some(dimension) == excluded {
            continue;
        }
        let Some(&value) = percentiles.get(&dimension) else {
            continue;
        };
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((dimension, value)),
        }
    }

    best.map(|(dimension, _)| dimension)
}

fn first_other_than(dimension: Dimension) -> Dimension {
    Dimension::ordered()
        .into_iter()
        .find(|candidate| *candidate != dimension)
        .unwrap_or(Dimension::Conscientiousness)
}

fn weakest_facet(percentiles: &FacetPercentiles) -> Option<&'static str> {
    let mut lowest: Option<(&'static str, i32)> = None;

    for facet in catalog::facets() {
        let Some(&value) = percentiles.get(facet.id) else {
            continue;
        };
        match lowest {
            Some((_, current)) if value >= current => {}
            _ => lowest = Some((facet.id, value)),
        }
    }

    lowest.map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimension_percentiles(values: [i32; 5]) -> DimensionPercentiles {
        Dimension::ordered().into_iter().zip(values).collect()
    }

    fn facet_percentiles(value: i32) -> FacetPercentiles {
        catalog::facets()
            .iter()
            .map(|facet| (facet.id.to_string(), value))
            .collect()
    }

    #[test]
    fn highest_dimension_becomes_dominant() {
        let resolution = resolve_archetype(
            &dimension_percentiles([40, 55, 80, 62, 10]),
            &facet_percentiles(50),
        );

        assert_eq!(resolution.dominant_dimension, Dimension::Extraversion);
        assert_eq!(resolution.secondary_dimension, Dimension::Agreeableness);
        assert_eq!(resolution.archetype.id, "catalyst");
    }

    #[test]
    fn ties_resolve_to_canonical_order() {
        let resolution = resolve_archetype(
            &dimension_percentiles([20, 75, 40, 75, 75]),
            &facet_percentiles(50),
        );

        assert_eq!(resolution.dominant_dimension, Dimension::Conscientiousness);
        assert_eq!(resolution.secondary_dimension, Dimension::Agreeableness);
        assert_eq!(resolution.archetype.id, "architect");
    }

    #[test]
    fn negative_percentiles_still_resolve() {
        let resolution = resolve_archetype(
            &dimension_percentiles([-17, -17, -17, -17, -17]),
            &facet_percentiles(-17),
        );

        assert_eq!(resolution.dominant_dimension, Dimension::Openness);
        assert_eq!(resolution.secondary_dimension, Dimension::Conscientiousness);
        assert_eq!(resolution.shadow_trait, "imagination");
    }

    #[test]
    fn shadow_trait_is_the_lowest_facet() {
        let mut facets = facet_percentiles(60);
        facets.insert("colere".to_string(), 12);
        facets.insert("modestie".to_string(), 12);
        facets.insert("ordre".to_string(), 30);

        let resolution = resolve_archetype(&dimension_percentiles([50; 5]), &facets);

        // modestie precedes colere in the facet table
        assert_eq!(resolution.shadow_trait, "modestie");
    }

    #[test]
    fn empty_inputs_fall_back_to_defaults() {
        let resolution = resolve_archetype(&DimensionPercentiles::new(), &FacetPercentiles::new());

        assert_eq!(resolution.dominant_dimension, Dimension::Openness);
        assert_eq!(resolution.secondary_dimension, Dimension::Conscientiousness);
        assert_eq!(resolution.archetype.id, "explorer");
        assert!(resolution.shadow_trait.is_empty());
    }

    #[test]
    fn secondary_skips_the_dominant_dimension_only() {
        let resolution = resolve_archetype(
            &dimension_percentiles([90, 10, 10, 10, 90]),
            &facet_percentiles(50),
        );

        assert_eq!(resolution.dominant_dimension, Dimension::Openness);
        assert_eq!(resolution.secondary_dimension, Dimension::Neuroticism);
    }
}
