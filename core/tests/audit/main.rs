mod amenity;
